use std::io;

use async_trait::async_trait;

/// Keeps expensive summarizer output between runs. Entries are keyed by summary
/// kind plus a fingerprint of the summarized inputs.
#[async_trait]
pub trait SummaryCache: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<Vec<String>>, SummaryCacheError>;

    async fn save(&self, key: &str, summaries: &[String]) -> Result<(), SummaryCacheError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryCacheError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
