use futures::stream::BoxStream;

use crate::domain::{ContentId, ContentRecord};

/// Key-value byte store holding raw content under the identifier of its summary.
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    async fn upsert(&self, records: &[ContentRecord]) -> Result<(), ContentStoreError>;

    /// One slot per requested key, `None` where the key is absent.
    async fn get(&self, ids: &[ContentId]) -> Result<Vec<Option<Vec<u8>>>, ContentStoreError>;

    /// Lazily enumerates every key currently stored.
    fn keys(&self) -> BoxStream<'_, Result<ContentId, ContentStoreError>>;

    /// Missing keys are ignored.
    async fn delete(&self, ids: &[ContentId]) -> Result<(), ContentStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ContentStoreError {
    #[error("store initialization failed: {0}")]
    InitFailed(String),
    #[error("upsert failed: {0}")]
    UpsertFailed(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("key listing failed: {0}")]
    ListFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
}
