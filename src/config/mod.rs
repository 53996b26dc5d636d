pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::{BackendKind, GistifyConfig};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "gistify")]
#[command(about = "Summarize text, PDF or image content into a gist, bullets or a visual")]
pub struct CliConfig {
    /// Text to summarize
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// File to summarize (text, JSON, PDF or image)
    #[arg(long, short)]
    pub file: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Gist)]
    pub format: OutputFormat,

    /// Path to a TOML configuration file
    #[arg(long, short)]
    pub config: Option<String>,

    /// Override the backend from the config file
    #[arg(long, value_enum)]
    pub backend: Option<BackendKind>,

    /// Delay of the mock backend in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Save the summary to summary-<date>.txt in this directory
    #[arg(long)]
    pub save: Option<String>,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,

    #[arg(long, help = "Highlight keywords with **markers** instead of colors")]
    pub markdown: bool,

    #[arg(long, help = "Disable keyword highlighting")]
    pub plain: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file (if any) and applies the command-line overrides on top.
    pub fn resolve(&self) -> Result<GistifyConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                GistifyConfig::from_file(path)?
            }
            None => GistifyConfig::default(),
        };

        if let Some(backend) = self.backend {
            config.backend.kind = backend;
            tracing::debug!("Backend overridden to: {:?}", backend);
        }
        if let Some(delay) = self.delay_ms {
            config.backend.delay_ms = Some(delay);
        }
        if let Some(dir) = &self.save {
            config.output.save_dir = Some(dir.clone());
        }
        if self.json {
            config.output.json = Some(true);
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(file) = &self.file {
            validate_path("file", file)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
