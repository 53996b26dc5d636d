use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum token length used when no configuration is supplied.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 4;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Lazy iterator over the lowercase words of a text.
///
/// Clones advance independently from the current position. Call [`tokenize`]
/// again to start over.
#[derive(Debug, Clone)]
pub struct Tokens<'t> {
    text: &'t str,
    pos: usize,
    min_len: usize,
}

impl<'t> Iterator for Tokens<'t> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.pos < self.text.len() {
            let word = WORD.find_at(self.text, self.pos)?;
            self.pos = word.end();
            if word.as_str().chars().count() >= self.min_len {
                return Some(word.as_str().to_lowercase());
            }
        }
        None
    }
}

/// Splits `text` into lowercase words of at least `min_len` characters.
/// Anything that is not a word character only separates tokens.
pub fn tokenize(text: &str, min_len: usize) -> Tokens<'_> {
    Tokens {
        text,
        pos: 0,
        min_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_filters_short_words() {
        let tokens: Vec<String> = tokenize("The Quick brown fox JUMPS!", 4).collect();
        assert_eq!(tokens, vec!["quick", "brown", "jumps"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert_eq!(tokenize("", 4).count(), 0);
        assert_eq!(tokenize("  ... !!! ", 4).count(), 0);
    }

    #[test]
    fn test_punctuation_only_separates() {
        let tokens: Vec<String> = tokenize("state-of-the-art,data;pipeline", 4).collect();
        assert_eq!(tokens, vec!["state", "data", "pipeline"]);
    }

    #[test]
    fn test_min_length_is_inclusive_and_counts_chars() {
        let tokens: Vec<String> = tokenize("abc abcd café", 4).collect();
        assert_eq!(tokens, vec!["abcd", "café"]);

        let tokens: Vec<String> = tokenize("abc abcd abcde", 5).collect();
        assert_eq!(tokens, vec!["abcde"]);
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let text = "alpha beta gamma";
        let first: Vec<String> = tokenize(text, 4).collect();
        let second: Vec<String> = tokenize(text, 4).collect();
        assert_eq!(first, second);

        let mut tokens = tokenize(text, 4);
        tokens.next();
        let rest: Vec<String> = tokens.clone().collect();
        assert_eq!(rest, vec!["beta", "gamma"]);
        assert_eq!(tokens.count(), 2);
    }
}
