pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use app::engine::GistEngine;
pub use app::session::{Outcome, SummarySession};
pub use config::toml_config::GistifyConfig;
pub use self::core::{extract_keywords, highlight, summarize, Summarizer, SummarizerConfig};
pub use domain::model::{OutputFormat, Span, SummaryResult, UploadedFile};
pub use utils::error::{GistError, Result};
