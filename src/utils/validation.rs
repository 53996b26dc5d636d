use crate::utils::error::{GistError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> GistError {
    GistError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Accepts `http`, `https` and `data` URLs, the schemes an image summary can point at.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" | "data" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("image_url", "https://example.com/a.png").is_ok());
        assert!(validate_url("image_url", "http://example.com").is_ok());
        assert!(validate_url("image_url", "data:image/png;base64,AAAA").is_ok());
        assert!(validate_url("image_url", "").is_err());
        assert!(validate_url("image_url", "invalid-url").is_err());
        assert!(validate_url("image_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("max_keywords", 5, 1).is_ok());
        assert!(validate_positive_number("max_keywords", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("min_token_length", 4, 1, 32).is_ok());
        assert!(validate_range("min_token_length", 0, 1, 32).is_err());
        assert!(validate_range("min_token_length", 40, 1, 32).is_err());
    }
}
