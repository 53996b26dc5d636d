use std::time::Instant;

use crate::app::session::{Outcome, SummarySession};
use crate::domain::model::{InputKind, OutputFormat, SummarizationRequest, SummaryResult, UploadedFile};
use crate::domain::ports::SummaryBackend;
use crate::utils::error::{GistError, Result};

/// Validates uploads and drives them through a backend, one request at a time.
pub struct GistEngine<B: SummaryBackend> {
    backend: B,
    summaries: SummarySession,
    explanations: SummarySession,
}

impl<B: SummaryBackend> GistEngine<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            summaries: SummarySession::new(),
            explanations: SummarySession::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn session(&self) -> &SummarySession {
        &self.summaries
    }

    /// Turns an upload into a request snapshot, rejecting missing or blank content.
    pub fn prepare(
        &self,
        upload: Option<&UploadedFile>,
        format: OutputFormat,
    ) -> Result<SummarizationRequest> {
        let upload = upload.ok_or_else(|| GistError::validation("Please upload content first!"))?;

        let pasted = upload.kind == InputKind::Text && upload.name.is_none();
        if pasted && !upload.has_text() {
            return Err(GistError::validation("Please enter some text first!"));
        }

        Ok(SummarizationRequest {
            id: self.summaries.begin(),
            text: upload.text.clone(),
            format,
        })
    }

    /// Summarizes `upload`. A request started later on the same engine wins;
    /// this one then reports [`Outcome::Superseded`].
    pub async fn run(
        &self,
        upload: Option<&UploadedFile>,
        format: OutputFormat,
    ) -> Result<Outcome<SummaryResult>> {
        let request = self.prepare(upload, format)?;
        let started = Instant::now();

        tracing::info!(
            "Generating {} summary {} with the {} backend",
            request.format,
            request.id,
            self.backend.name()
        );

        let outcome = self
            .summaries
            .run(request.id, self.backend.summarize(&request))
            .await;

        match outcome {
            Outcome::Completed(result) => {
                let result = result?;
                tracing::info!(
                    "Summary {} generated in {:?} ({} keywords)",
                    request.id,
                    started.elapsed(),
                    result.keywords.len()
                );
                Ok(Outcome::Completed(result))
            }
            Outcome::Superseded { id, latest } => Ok(Outcome::Superseded { id, latest }),
        }
    }

    /// Explains an uploaded image. Returns `None` for uploads without a preview.
    pub async fn explain(&self, upload: &UploadedFile) -> Result<Option<Outcome<String>>> {
        let preview = match (&upload.kind, &upload.preview) {
            (InputKind::Image, Some(preview)) => preview,
            _ => return Ok(None),
        };

        let id = self.explanations.begin();
        tracing::info!("Explaining image {}", id);

        match self
            .explanations
            .run(id, self.backend.explain_image(preview))
            .await
        {
            Outcome::Completed(explanation) => Ok(Some(Outcome::Completed(explanation?))),
            Outcome::Superseded { id, latest } => Ok(Some(Outcome::Superseded { id, latest })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::backend::{mock_summary, HeuristicBackend, MockBackend};
    use crate::utils::error::ErrorCategory;
    use std::time::Duration;

    #[test]
    fn test_prepare_requires_an_upload() {
        let engine = GistEngine::new(HeuristicBackend::default());
        let err = engine.prepare(None, OutputFormat::Gist).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.user_friendly_message(), "Please upload content first!");
    }

    #[test]
    fn test_prepare_rejects_blank_pasted_text() {
        let engine = GistEngine::new(HeuristicBackend::default());
        let upload = UploadedFile::from_text("   \n ");
        let err = engine.prepare(Some(&upload), OutputFormat::Gist).unwrap_err();
        assert_eq!(err.user_friendly_message(), "Please enter some text first!");
    }

    #[test]
    fn test_prepare_snapshots_text_with_fresh_ids() {
        let engine = GistEngine::new(HeuristicBackend::default());
        let upload = UploadedFile::from_text("Some words.");
        let first = engine.prepare(Some(&upload), OutputFormat::Gist).unwrap();
        let second = engine.prepare(Some(&upload), OutputFormat::Bullets).unwrap();
        assert!(second.id > first.id);
        assert_eq!(engine.session().latest(), second.id);
        assert!(!engine.session().is_current(first.id));
        assert_eq!(first.text.as_deref(), Some("Some words."));
        assert_eq!(second.format, OutputFormat::Bullets);
    }

    #[tokio::test]
    async fn test_run_with_heuristic_backend() {
        let engine = GistEngine::new(HeuristicBackend::default());
        let upload = UploadedFile::from_text("Cats are great. Dogs are great too. Birds fly.");
        let result = engine
            .run(Some(&upload), OutputFormat::Gist)
            .await
            .unwrap()
            .completed()
            .unwrap();
        assert_eq!(result.content, "Cats are great. Dogs are great too.");
    }

    #[tokio::test]
    async fn test_newer_request_supersedes_pending_one() {
        let engine = GistEngine::new(MockBackend::new(Duration::from_millis(200)));
        let upload = UploadedFile::from_text("First upload.");

        let (first, second) = tokio::join!(
            engine.run(Some(&upload), OutputFormat::Gist),
            async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                engine.run(Some(&upload), OutputFormat::Bullets).await
            }
        );

        assert!(first.unwrap().is_superseded());
        assert_eq!(
            second.unwrap().completed(),
            Some(mock_summary(OutputFormat::Bullets))
        );
    }

    #[tokio::test]
    async fn test_explain_only_handles_images() {
        let engine = GistEngine::new(MockBackend::new(Duration::from_millis(1)));
        let text = UploadedFile::from_text("Not an image.");
        assert!(engine.explain(&text).await.unwrap().is_none());

        let image = crate::adapters::intake::from_bytes("chart.png", vec![1, 2, 3]);
        let outcome = engine.explain(&image).await.unwrap().unwrap();
        assert!(outcome.completed().unwrap().starts_with("This image appears"));
    }
}
