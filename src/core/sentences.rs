/// Splits on `.`, `!` and `?`, trimming each piece and dropping empty ones.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Splits a single sentence into comma or semicolon separated phrases.
pub fn split_phrases(text: &str) -> Vec<&str> {
    text.split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Joins the words of `text` with single spaces, so hard-wrapped lines
/// become one line.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
