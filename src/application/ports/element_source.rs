use async_trait::async_trait;

use crate::domain::Element;

#[async_trait]
pub trait ElementSource: Send + Sync {
    async fn elements(&self, data: &[u8]) -> Result<Vec<Element>, ElementSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ElementSourceError {
    #[error("invalid partitioner payload: {0}")]
    InvalidPayload(String),
    #[error("partitioning failed: {0}")]
    PartitioningFailed(String),
}
