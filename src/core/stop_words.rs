use once_cell::sync::Lazy;
use std::collections::HashSet;

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "all", "also", "am", "an", "and", "any", "are", "as", "at", "be", "because",
    "been", "but", "by", "can", "could", "did", "do", "does", "down", "for", "from", "had",
    "has", "have", "he", "her", "here", "him", "his", "how", "i", "if", "in", "into", "is",
    "it", "its", "just", "more", "most", "my", "no", "not", "now", "of", "on", "only", "or",
    "other", "our", "out", "over", "she", "should", "so", "some", "such", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "up", "very", "was", "we", "were", "what", "when", "where", "which", "who", "why",
    "will", "with", "would", "you", "your",
];

static BUILTIN: Lazy<StopWords> = Lazy::new(|| StopWords {
    words: ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
});

/// Fixed set of words that never become keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The built-in English list, built once per process.
    pub fn builtin() -> &'static StopWords {
        &BUILTIN
    }

    /// The built-in list plus `extra`. Blank entries are ignored.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = BUILTIN.words.clone();
        words.extend(
            extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drops every stop word from `tokens`, keeping the order of the rest.
    pub fn filter<'a, I>(&'a self, tokens: I) -> impl Iterator<Item = String> + 'a
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: 'a,
    {
        tokens.into_iter().filter(move |token| !self.contains(token))
    }
}

impl Default for StopWords {
    fn default() -> Self {
        BUILTIN.clone()
    }
}
