use async_trait::async_trait;
use std::time::Duration;

use crate::core::summarizer::{Summarizer, DEFAULT_IMAGE_URL};
use crate::domain::model::{OutputFormat, SummarizationRequest, SummaryResult};
use crate::domain::ports::SummaryBackend;
use crate::utils::error::{GistError, Result};

/// Runs the keyword heuristic in-process.
#[derive(Debug, Clone, Default)]
pub struct HeuristicBackend {
    summarizer: Summarizer,
}

impl HeuristicBackend {
    pub fn new(summarizer: Summarizer) -> Self {
        Self { summarizer }
    }
}

#[async_trait]
impl SummaryBackend for HeuristicBackend {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn summarize(&self, request: &SummarizationRequest) -> Result<SummaryResult> {
        let text = request.text.as_deref().unwrap_or_default();
        Ok(self.summarizer.summarize(text, request.format))
    }

    async fn explain_image(&self, _preview: &str) -> Result<String> {
        Err(GistError::backend(
            "image explanations are only available from the mock backend",
        ))
    }
}

pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(2000);

const MOCK_KEYWORDS: [&str; 5] = [
    "artificial intelligence",
    "machine learning",
    "natural language processing",
    "algorithmic bias",
    "privacy",
];

const MOCK_GIST: &str = "The document discusses artificial intelligence and its impact on modern \
society. It explores how machine learning algorithms have evolved over the past decade, enabling \
significant advancements in natural language processing, computer vision, and predictive \
analytics. The text highlights ethical considerations around AI, including privacy concerns, \
algorithmic bias, and the future of human-AI collaboration.";

const MOCK_BULLETS: [&str; 6] = [
    "Artificial intelligence has transformed numerous industries in the modern world",
    "Machine learning algorithms have evolved significantly over the past decade",
    "Natural language processing enables computers to understand human communication",
    "Computer vision allows machines to interpret and process visual information",
    "Ethical considerations include privacy concerns and algorithmic bias",
    "Human-AI collaboration will shape the future of the technology",
];

pub const MOCK_IMAGE_EXPLANATION: &str = "This image appears to be a digital visualization \
related to artificial intelligence or machine learning. It features a network of interconnected \
nodes or neural pathways represented in a blue color scheme against a dark background. This \
visual metaphor is commonly used to illustrate how AI systems process information through neural \
networks - mimicking the way human brains make connections. The bright, glowing points likely \
represent data or decision points within the AI system.";

/// Canned result the mock backend returns for `format`.
pub fn mock_summary(format: OutputFormat) -> SummaryResult {
    let keywords = |n: usize| -> Vec<String> {
        MOCK_KEYWORDS[..n].iter().map(|k| k.to_string()).collect()
    };

    match format {
        OutputFormat::Gist => SummaryResult {
            format,
            content: MOCK_GIST.to_string(),
            keywords: keywords(5),
            image_url: None,
        },
        OutputFormat::Bullets => SummaryResult {
            format,
            content: MOCK_BULLETS.join("\n"),
            keywords: keywords(5),
            image_url: None,
        },
        OutputFormat::Image => SummaryResult {
            format,
            content: "Visual representation of artificial intelligence concepts".to_string(),
            keywords: vec![
                "artificial intelligence".to_string(),
                "machine learning".to_string(),
                "neural networks".to_string(),
            ],
            image_url: Some(DEFAULT_IMAGE_URL.to_string()),
        },
    }
}

/// Stands in for a remote service: waits, then answers with canned data.
#[derive(Debug, Clone)]
pub struct MockBackend {
    delay: Duration,
}

impl MockBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_DELAY)
    }
}

#[async_trait]
impl SummaryBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn summarize(&self, request: &SummarizationRequest) -> Result<SummaryResult> {
        tracing::debug!("Mock backend answering {} after {:?}", request.id, self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(mock_summary(request.format))
    }

    async fn explain_image(&self, _preview: &str) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        Ok(MOCK_IMAGE_EXPLANATION.to_string())
    }
}
