use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::domain::model::Span;

// `\b` is defined by Unicode `\w`, so the edges are tested with the same class.
static STARTS_WITH_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A\w").unwrap());
static ENDS_WITH_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w\z").unwrap());

/// Literal pattern for one keyword, anchored to word boundaries on the sides
/// that start or end with a word character.
fn keyword_pattern(keyword: &str) -> Option<String> {
    if keyword.is_empty() {
        return None;
    }

    let mut pattern = String::new();
    if STARTS_WITH_WORD.is_match(keyword) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(keyword));
    if ENDS_WITH_WORD.is_match(keyword) {
        pattern.push_str(r"\b");
    }
    Some(pattern)
}

/// Matches every keyword of a set at once, case-insensitively.
///
/// All keywords are compiled into one alternation, so when two keywords could
/// match at the same position the one listed first wins.
#[derive(Debug, Clone)]
pub struct Highlighter {
    matcher: Option<Regex>,
}

impl Highlighter {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        let alternatives: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().trim())
            .filter_map(keyword_pattern)
            .collect();

        if alternatives.is_empty() {
            return Self { matcher: None };
        }

        let pattern = format!("(?:{})", alternatives.join("|"));
        let matcher = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => Some(regex),
            Err(e) => {
                tracing::warn!("Keyword matcher could not be built, highlighting disabled: {}", e);
                None
            }
        };

        Self { matcher }
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_none()
    }

    /// Splits `text` into plain and matched spans. Joining the span texts
    /// gives back `text` unchanged.
    pub fn spans(&self, text: &str) -> Vec<Span> {
        let matcher = match &self.matcher {
            Some(matcher) if !text.is_empty() => matcher,
            _ => return vec![Span::plain(text)],
        };

        let mut spans = Vec::new();
        let mut last = 0;

        for found in matcher.find_iter(text) {
            if found.start() == found.end() {
                continue;
            }
            if found.start() > last {
                spans.push(Span::plain(&text[last..found.start()]));
            }
            spans.push(Span::matched(found.as_str()));
            last = found.end();
        }

        if last < text.len() || spans.is_empty() {
            spans.push(Span::plain(&text[last..]));
        }

        spans
    }
}

/// One-shot form of [`Highlighter::spans`].
pub fn highlight<S: AsRef<str>>(text: &str, keywords: &[S]) -> Vec<Span> {
    Highlighter::new(keywords).spans(text)
}
