use crate::domain::model::{SummarizationRequest, SummaryResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Anything that can eventually turn a request into a summary.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    fn name(&self) -> &'static str;
    async fn summarize(&self, request: &SummarizationRequest) -> Result<SummaryResult>;
    async fn explain_image(&self, preview: &str) -> Result<String>;
}

#[async_trait]
impl<T: SummaryBackend + ?Sized> SummaryBackend for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn summarize(&self, request: &SummarizationRequest) -> Result<SummaryResult> {
        (**self).summarize(request).await
    }

    async fn explain_image(&self, preview: &str) -> Result<String> {
        (**self).explain_image(preview).await
    }
}
