use async_trait::async_trait;

use super::{SearchHit, SearchableIndexError};
use crate::domain::{ContentId, SummaryRecord};

/// Similarity-searchable store of summaries. Embedding the records is the
/// implementation's job.
#[async_trait]
pub trait SearchableIndex: Send + Sync {
    async fn add_records(&self, records: &[SummaryRecord]) -> Result<(), SearchableIndexError>;

    async fn similarity_search(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchHit>, SearchableIndexError>;

    async fn delete(&self, ids: &[ContentId]) -> Result<(), SearchableIndexError>;

    async fn clear(&self) -> Result<(), SearchableIndexError>;
}
