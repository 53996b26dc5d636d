use crate::app::backend::{HeuristicBackend, MockBackend, DEFAULT_MOCK_DELAY};
use crate::core::summarizer::{Summarizer, SummarizerConfig};
use crate::domain::ports::SummaryBackend;
use crate::utils::error::{GistError, Result};
use crate::utils::validation::{validate_path, validate_range, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Longest mock delay accepted from configuration.
const MAX_DELAY_MS: u64 = 60_000;

static ENV_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GistifyConfig {
    pub summarizer: SummarizerConfig,
    pub backend: BackendConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Heuristic,
    Mock,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub kind: BackendKind,
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub save_dir: Option<String>,
    pub json: Option<bool>,
}

impl GistifyConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GistError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content)
            .map_err(|e| GistError::config(format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        let result = ENV_VAR.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        result.to_string()
    }

    pub fn mock_delay(&self) -> Duration {
        self.backend
            .delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_MOCK_DELAY)
    }

    pub fn json_output(&self) -> bool {
        self.output.json.unwrap_or(false)
    }

    pub fn build_backend(&self) -> Box<dyn SummaryBackend> {
        match self.backend.kind {
            BackendKind::Heuristic => Box::new(HeuristicBackend::new(Summarizer::new(
                self.summarizer.clone(),
            ))),
            BackendKind::Mock => Box::new(MockBackend::new(self.mock_delay())),
        }
    }
}

impl Validate for GistifyConfig {
    fn validate(&self) -> Result<()> {
        self.summarizer.validate()?;

        if let Some(delay) = self.backend.delay_ms {
            validate_range("backend.delay_ms", delay, 0, MAX_DELAY_MS)?;
        }

        if let Some(dir) = &self.output.save_dir {
            validate_path("output.save_dir", dir)?;
        }

        Ok(())
    }
}
