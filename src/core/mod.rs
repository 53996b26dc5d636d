//! The summarization heuristic: pure, synchronous and total over its input.

pub mod bullets;
pub mod gist;
pub mod highlight;
pub mod keywords;
pub mod sentences;
pub mod stop_words;
pub mod summarizer;
pub mod tokenizer;

pub use highlight::{highlight, Highlighter};
pub use keywords::extract_keywords;
pub use summarizer::{summarize, Summarizer, SummarizerConfig};
