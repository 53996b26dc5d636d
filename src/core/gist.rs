use crate::core::sentences::split_sentences;

/// Returned when the text has no sentence to work with.
pub const GENERIC_GIST: &str = "This content covers various topics.";

pub const ELLIPSIS: &str = "...";

/// Builds a short paragraph from the leading sentences of `text`.
///
/// Two or more sentences: the first two, joined and closed with a period.
/// One sentence: itself with a period, or its first `max_chars` characters
/// followed by [`ELLIPSIS`] when it is longer than that.
pub fn generate_gist(text: &str, max_chars: usize) -> String {
    let sentences = split_sentences(text);

    match sentences.as_slice() {
        [] => GENERIC_GIST.to_string(),
        [only] if only.chars().count() > max_chars => {
            let head: String = only.chars().take(max_chars).collect();
            format!("{}{}", head.trim_end(), ELLIPSIS)
        }
        [only] => format!("{}.", only),
        [first, second, ..] => format!("{}. {}.", first, second),
    }
}
