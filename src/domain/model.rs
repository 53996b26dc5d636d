use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::GistError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Gist,
    Bullets,
    Image,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Gist, OutputFormat::Bullets, OutputFormat::Image];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Gist => "gist",
            OutputFormat::Bullets => "bullets",
            OutputFormat::Image => "image",
        }
    }

    /// Heading shown above a rendered summary.
    pub fn heading(&self) -> &'static str {
        match self {
            OutputFormat::Gist => "Text Summary",
            OutputFormat::Bullets => "Bullet Points",
            OutputFormat::Image => "Visual Summary",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = GistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gist" => Ok(OutputFormat::Gist),
            "bullets" | "bullet" => Ok(OutputFormat::Bullets),
            "image" => Ok(OutputFormat::Image),
            other => Err(GistError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: gist, bullets, image".to_string(),
            }),
        }
    }
}

/// A finished summary. Built once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub format: OutputFormat,
    pub content: String,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl SummaryResult {
    /// Bullet items of a `bullets` summary; any other format yields its content as one item.
    pub fn bullet_items(&self) -> Vec<&str> {
        match self.format {
            OutputFormat::Bullets => self
                .content
                .split('\n')
                .filter(|line| !line.trim().is_empty())
                .collect(),
            _ => vec![self.content.as_str()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Pdf,
    Image,
}

impl InputKind {
    /// Classifies a MIME type the way the upload form does: anything that is
    /// neither an image nor a PDF is treated as text.
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.trim().to_ascii_lowercase();
        if mime.contains("image") {
            InputKind::Image
        } else if mime == "application/pdf" {
            InputKind::Pdf
        } else {
            InputKind::Text
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputKind::Text => "text",
            InputKind::Pdf => "pdf",
            InputKind::Image => "image",
        };
        f.write_str(name)
    }
}

/// Content handed over by the intake layer. Replaced wholesale on every upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub kind: InputKind,
    pub name: Option<String>,
    pub payload: Vec<u8>,
    pub text: Option<String>,
    pub preview: Option<String>,
}

impl UploadedFile {
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            kind: InputKind::Text,
            name: None,
            payload: text.as_bytes().to_vec(),
            text: Some(text),
            preview: None,
        }
    }

    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Immutable snapshot of one summarization request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizationRequest {
    pub id: RequestId,
    pub text: Option<String>,
    pub format: OutputFormat,
}

/// One piece of highlighted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub text: String,
    pub is_match: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: false,
        }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: true,
        }
    }
}
