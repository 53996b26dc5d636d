use std::collections::HashSet;

use crate::core::stop_words::StopWords;
use crate::core::tokenizer::{tokenize, DEFAULT_MIN_TOKEN_LENGTH};

/// Keeps the first occurrence of each token, in order, up to `max_count`.
///
/// Order is order of appearance, not frequency.
pub fn unique_in_order<I>(tokens: I, max_count: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for token in tokens {
        if keywords.len() >= max_count {
            break;
        }
        if seen.insert(token.clone()) {
            keywords.push(token);
        }
    }

    keywords
}

/// Runs the full tokenize, filter, dedupe pass with explicit settings.
pub fn extract_with(
    text: &str,
    min_token_length: usize,
    stop_words: &StopWords,
    max_count: usize,
) -> Vec<String> {
    unique_in_order(
        stop_words.filter(tokenize(text, min_token_length)),
        max_count,
    )
}

/// Keywords of `text` with the default token length and stop-word list.
pub fn extract_keywords(text: &str, max_count: usize) -> Vec<String> {
    extract_with(
        text,
        DEFAULT_MIN_TOKEN_LENGTH,
        StopWords::builtin(),
        max_count,
    )
}
