use thiserror::Error;

#[derive(Error, Debug)]
pub enum GistError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Backend error: {message}")]
    BackendError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Backend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GistError {
    pub fn config(message: impl Into<String>) -> Self {
        GistError::ConfigError {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        GistError::ValidationError {
            message: message.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        GistError::BackendError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GistError::IoError(_) | GistError::SerializationError(_) => ErrorCategory::Io,
            GistError::ConfigError { .. } | GistError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            GistError::ValidationError { .. } => ErrorCategory::Input,
            GistError::BackendError { .. } => ErrorCategory::Backend,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GistError::ValidationError { .. } => ErrorSeverity::Low,
            GistError::BackendError { .. } => ErrorSeverity::Medium,
            GistError::ConfigError { .. }
            | GistError::InvalidConfigValueError { .. }
            | GistError::SerializationError(_) => ErrorSeverity::High,
            GistError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GistError::IoError(_) => "Check that the file exists and is readable",
            GistError::SerializationError(_) => "Retry without --json or report the input that failed",
            GistError::ConfigError { .. } => "Check the TOML configuration file syntax",
            GistError::InvalidConfigValueError { .. } => {
                "Fix the highlighted configuration value and run again"
            }
            GistError::ValidationError { .. } => "Provide some content with --text or --file",
            GistError::BackendError { .. } => "Retry the request or switch to the heuristic backend",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GistError::IoError(e) => format!("Could not read or write a file: {}", e),
            GistError::SerializationError(e) => format!("Could not encode the summary: {}", e),
            GistError::ConfigError { message } => format!("Configuration problem: {}", message),
            GistError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            GistError::ValidationError { message } => message.clone(),
            GistError::BackendError { message } => {
                format!("The summary could not be generated: {}", message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_low_severity() {
        let err = GistError::validation("Please upload content first!");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "Please upload content first!");
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err: GistError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().contains("gone"));
    }
}
