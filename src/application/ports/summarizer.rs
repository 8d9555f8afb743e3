use async_trait::async_trait;

use crate::domain::SummaryInput;

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, input: &SummaryInput) -> Result<String, SummarizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("summarization request failed: {0}")]
    ApiRequestFailed(String),
    #[error("summarization rate limited")]
    RateLimited,
    #[error("invalid summarization response: {0}")]
    InvalidResponse(String),
}
