use chrono::NaiveDate;

use crate::core::highlight::Highlighter;
use crate::domain::model::{OutputFormat, Span, SummaryResult};
use crate::domain::ports::Storage;
use crate::utils::error::Result;

const ANSI_BOLD: &str = "\x1b[1;33m";
const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Bold yellow keywords for terminals.
    #[default]
    Ansi,
    /// `**keyword**`
    Markdown,
    Plain,
}

pub fn render_spans(spans: &[Span], style: RenderStyle) -> String {
    let mut out = String::new();
    for span in spans {
        match (span.is_match, style) {
            (true, RenderStyle::Ansi) => {
                out.push_str(ANSI_BOLD);
                out.push_str(&span.text);
                out.push_str(ANSI_RESET);
            }
            (true, RenderStyle::Markdown) => {
                out.push_str("**");
                out.push_str(&span.text);
                out.push_str("**");
            }
            _ => out.push_str(&span.text),
        }
    }
    out
}

/// Human-readable rendering with the summary's keywords highlighted.
pub fn render_summary(result: &SummaryResult, style: RenderStyle) -> String {
    let highlighter = Highlighter::new(&result.keywords);
    let mut lines = vec![result.format.heading().to_string(), String::new()];

    match result.format {
        OutputFormat::Image => {
            if let Some(url) = &result.image_url {
                lines.push(format!("Image: {}", url));
            }
            lines.push(render_spans(&highlighter.spans(&result.content), style));
        }
        OutputFormat::Bullets => {
            for item in result.bullet_items() {
                lines.push(format!("• {}", render_spans(&highlighter.spans(item), style)));
            }
        }
        OutputFormat::Gist => {
            lines.push(render_spans(&highlighter.spans(&result.content), style));
        }
    }

    if !result.keywords.is_empty() {
        lines.push(String::new());
        lines.push(format!("Keywords: {}", result.keywords.join(", ")));
    }

    lines.join("\n")
}

pub fn download_filename(date: NaiveDate) -> String {
    format!("summary-{}.txt", date.format("%Y-%m-%d"))
}

/// Writes the summary content to `summary-<date>.txt` and returns the file name.
pub async fn save_summary<S: Storage>(
    storage: &S,
    result: &SummaryResult,
    date: NaiveDate,
) -> Result<String> {
    let filename = download_filename(date);
    storage.write_file(&filename, result.content.as_bytes()).await?;
    tracing::info!("Summary downloaded to {}", filename);
    Ok(filename)
}
