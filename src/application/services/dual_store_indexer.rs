use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::ports::{
    ContentStore, ContentStoreError, SearchableIndex, SearchableIndexError,
};
use crate::domain::{ContentId, ContentRecord, SummaryRecord};

/// Writes summaries to the searchable index and raw content to the content store,
/// linked by a freshly generated identifier per pair.
pub struct DualStoreIndexer {
    index: Arc<dyn SearchableIndex>,
    store: Arc<dyn ContentStore>,
}

impl DualStoreIndexer {
    pub fn new(index: Arc<dyn SearchableIndex>, store: Arc<dyn ContentStore>) -> Self {
        Self { index, store }
    }

    /// Position `i` of `summaries` and `raw_contents` must describe the same unit.
    /// Returns the generated identifiers in input order.
    ///
    /// If the content store rejects the batch after the index accepted it, the
    /// just-written summaries are deleted from the index before the error is returned.
    #[tracing::instrument(skip_all, fields(count = summaries.len(), id_key = %id_key))]
    pub async fn index(
        &self,
        summaries: &[String],
        raw_contents: &[String],
        id_key: &str,
    ) -> Result<Vec<ContentId>, IndexingError> {
        if summaries.len() != raw_contents.len() {
            return Err(IndexingError::LengthMismatch {
                summaries: summaries.len(),
                raw_contents: raw_contents.len(),
            });
        }

        if summaries.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<ContentId> = summaries.iter().map(|_| ContentId::new()).collect();

        let summary_records: Vec<SummaryRecord> = ids
            .iter()
            .zip(summaries)
            .map(|(id, summary)| SummaryRecord::new(*id, summary.clone(), id_key))
            .collect();

        self.index.add_records(&summary_records).await?;
        debug!(count = ids.len(), "summaries_indexed");

        let content_records: Vec<ContentRecord> = ids
            .iter()
            .zip(raw_contents)
            .map(|(id, raw)| ContentRecord::from_text(*id, raw))
            .collect();

        if let Err(store_error) = self.store.upsert(&content_records).await {
            warn!(error = %store_error, "content_upsert_failed_removing_summaries");
            return match self.index.delete(&ids).await {
                Ok(()) => Err(IndexingError::ContentStore(store_error)),
                Err(rollback_error) => Err(IndexingError::Diverged {
                    store: store_error,
                    rollback: rollback_error,
                }),
            };
        }

        info!(count = ids.len(), "pairs_indexed");
        Ok(ids)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IndexingError {
    #[error("length mismatch: {summaries} summaries for {raw_contents} raw contents")]
    LengthMismatch {
        summaries: usize,
        raw_contents: usize,
    },
    #[error("searchable index: {0}")]
    Index(#[from] SearchableIndexError),
    #[error("content store: {0}")]
    ContentStore(#[from] ContentStoreError),
    #[error("stores diverged: content store failed ({store}), summary removal failed ({rollback})")]
    Diverged {
        store: ContentStoreError,
        rollback: SearchableIndexError,
    },
}
