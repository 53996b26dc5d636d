use crate::core::sentences::{collapse_whitespace, split_phrases, split_sentences, word_count};

const GENERIC_SUBJECT: &str = "various topics";
const GENERIC_ASPECTS: &str = "general themes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletLimits {
    pub max_bullets: usize,
    pub max_phrases: usize,
    /// Pieces shorter than this are not worth a bullet.
    pub min_item_chars: usize,
}

impl Default for BulletLimits {
    fn default() -> Self {
        Self {
            max_bullets: 5,
            max_phrases: 3,
            min_item_chars: 4,
        }
    }
}

/// Each bullet is a single line; the summary joins them with `\n`.
fn non_trivial(pieces: Vec<&str>, limit: usize, min_chars: usize) -> Vec<String> {
    pieces
        .into_iter()
        .map(collapse_whitespace)
        .filter(|piece| piece.chars().count() >= min_chars)
        .take(limit)
        .collect()
}

/// Bullet points for `text`.
///
/// Several sentences become one bullet each. A single sentence is split into
/// comma or semicolon phrases instead. When neither yields anything usable the
/// bullets are built from `keywords`.
pub fn generate_bullets(text: &str, keywords: &[String], limits: BulletLimits) -> Vec<String> {
    let sentences = split_sentences(text);

    let items = if sentences.len() > 1 {
        non_trivial(sentences, limits.max_bullets, limits.min_item_chars)
    } else {
        non_trivial(
            split_phrases(text.trim()),
            limits.max_phrases,
            limits.min_item_chars,
        )
    };

    if items.is_empty() {
        keyword_bullets(text, keywords)
    } else {
        items
    }
}

/// Template bullets naming the leading keywords and the word count.
pub fn keyword_bullets(text: &str, keywords: &[String]) -> Vec<String> {
    let subject = keywords
        .first()
        .map(String::as_str)
        .unwrap_or(GENERIC_SUBJECT);

    let aspects = keywords.get(1..3.min(keywords.len())).unwrap_or_default();
    let aspects = if aspects.is_empty() {
        GENERIC_ASPECTS.to_string()
    } else {
        aspects.join(", ")
    };

    let mut bullets = vec![
        format!("Core subject: {}", subject),
        format!("Key aspects: {}", aspects),
    ];

    if let Some(extra) = keywords.get(3..6.min(keywords.len())) {
        if !extra.is_empty() {
            bullets.push(format!("Additional elements: {}", extra.join(", ")));
        }
    }

    bullets.push(format!("Word count: {}", word_count(text)));
    bullets
}
