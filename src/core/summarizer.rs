use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::bullets::{generate_bullets, BulletLimits};
use crate::core::gist::generate_gist;
use crate::core::keywords::extract_with;
use crate::core::stop_words::StopWords;
use crate::core::tokenizer::DEFAULT_MIN_TOKEN_LENGTH;
use crate::domain::model::{OutputFormat, SummaryResult};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};

pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1677442136019-21780ecad781?q=80&w=2532&auto=format&fit=crop";

/// Named constants of the summarization heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    pub min_token_length: usize,
    pub max_keywords: usize,
    pub gist_max_chars: usize,
    pub max_bullets: usize,
    pub max_phrases: usize,
    pub min_bullet_chars: usize,
    pub extra_stop_words: Vec<String>,
    pub image_url: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            max_keywords: 8,
            gist_max_chars: 100,
            max_bullets: 5,
            max_phrases: 3,
            min_bullet_chars: 4,
            extra_stop_words: Vec::new(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
        }
    }
}

impl Validate for SummarizerConfig {
    fn validate(&self) -> Result<()> {
        validate_range("summarizer.min_token_length", self.min_token_length, 1, 32)?;
        validate_range("summarizer.max_keywords", self.max_keywords, 1, 50)?;
        validate_positive_number("summarizer.gist_max_chars", self.gist_max_chars, 10)?;
        validate_range("summarizer.max_bullets", self.max_bullets, 1, 20)?;
        validate_range("summarizer.max_phrases", self.max_phrases, 1, 20)?;
        validate_range("summarizer.min_bullet_chars", self.min_bullet_chars, 1, 100)?;
        validate_url("summarizer.image_url", &self.image_url)?;
        Ok(())
    }
}

static DEFAULT_SUMMARIZER: Lazy<Summarizer> = Lazy::new(Summarizer::default);

/// The keyword and sentence heuristic behind every summary.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    stop_words: StopWords,
}

impl Summarizer {
    pub fn new(config: SummarizerConfig) -> Self {
        let stop_words = if config.extra_stop_words.is_empty() {
            StopWords::builtin().clone()
        } else {
            StopWords::with_extra(&config.extra_stop_words)
        };
        Self { config, stop_words }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn keywords(&self, text: &str) -> Vec<String> {
        extract_with(
            text,
            self.config.min_token_length,
            &self.stop_words,
            self.config.max_keywords,
        )
    }

    /// Summarizes `text` in the requested shape. Never fails: degenerate
    /// input yields empty keywords and generic content.
    pub fn summarize(&self, text: &str, format: OutputFormat) -> SummaryResult {
        let keywords = self.keywords(text);

        let (content, image_url) = match format {
            OutputFormat::Gist => (generate_gist(text, self.config.gist_max_chars), None),
            OutputFormat::Bullets => {
                let limits = BulletLimits {
                    max_bullets: self.config.max_bullets,
                    max_phrases: self.config.max_phrases,
                    min_item_chars: self.config.min_bullet_chars,
                };
                (generate_bullets(text, &keywords, limits).join("\n"), None)
            }
            OutputFormat::Image => (
                image_caption(&keywords),
                Some(self.config.image_url.clone()),
            ),
        };

        tracing::debug!(
            format = %format,
            keywords = keywords.len(),
            chars = content.chars().count(),
            "Summary generated"
        );

        SummaryResult {
            format,
            content,
            keywords,
            image_url,
        }
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(SummarizerConfig::default())
    }
}

fn image_caption(keywords: &[String]) -> String {
    match keywords {
        [] => "Visual representation of various topics".to_string(),
        [only] => format!("Visual representation of {} concepts", only),
        _ => {
            let shown = &keywords[..keywords.len().min(3)];
            let (rest, last) = shown.split_at(shown.len() - 1);
            format!(
                "Visual representation of {} and {} concepts",
                rest.join(", "),
                last[0]
            )
        }
    }
}

/// Summarizes with the default configuration.
pub fn summarize(text: &str, format: OutputFormat) -> SummaryResult {
    DEFAULT_SUMMARIZER.summarize(text, format)
}
