use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::application::ports::{Embedder, SearchHit, SearchableIndex, SearchableIndexError};
use crate::domain::{ContentId, Embedding, SummaryRecord};

struct IndexedSummary {
    record: SummaryRecord,
    embedding: Embedding,
}

/// Brute-force cosine search over summaries held in process memory.
pub struct InMemorySearchableIndex {
    embedder: Arc<dyn Embedder>,
    entries: RwLock<Vec<IndexedSummary>>,
}

impl InMemorySearchableIndex {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self {
            embedder,
            entries: RwLock::new(Vec::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Snapshot of every stored record, in insertion order.
    pub async fn records(&self) -> Vec<SummaryRecord> {
        self.entries
            .read()
            .await
            .iter()
            .map(|entry| entry.record.clone())
            .collect()
    }
}

#[async_trait]
impl SearchableIndex for InMemorySearchableIndex {
    #[instrument(skip_all, fields(count = records.len()))]
    async fn add_records(&self, records: &[SummaryRecord]) -> Result<(), SearchableIndexError> {
        if records.is_empty() {
            return Ok(());
        }

        let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;

        if embeddings.len() != records.len() {
            return Err(SearchableIndexError::UpsertFailed(
                "records and embeddings count mismatch".to_string(),
            ));
        }

        let mut entries = self.entries.write().await;
        for (record, embedding) in records.iter().zip(embeddings) {
            let entry = IndexedSummary {
                record: record.clone(),
                embedding,
            };
            match entries.iter_mut().find(|e| e.record.id == record.id) {
                Some(existing) => *existing = entry,
                None => entries.push(entry),
            }
        }

        debug!(count = records.len(), total = entries.len(), "summaries_added");
        Ok(())
    }

    #[instrument(skip(self, query))]
    async fn similarity_search(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchHit>, SearchableIndexError> {
        if top_k == 0 {
            return Ok(Vec::new());
        }

        let query_embedding = self.embedder.embed(query).await?;
        let entries = self.entries.read().await;

        let mut hits: Vec<SearchHit> = entries
            .iter()
            .map(|entry| SearchHit {
                record: entry.record.clone(),
                score: entry.embedding.cosine_similarity(&query_embedding),
            })
            .collect();

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits.truncate(top_k);

        Ok(hits)
    }

    async fn delete(&self, ids: &[ContentId]) -> Result<(), SearchableIndexError> {
        let doomed: HashSet<&ContentId> = ids.iter().collect();
        self.entries
            .write()
            .await
            .retain(|entry| !doomed.contains(&entry.record.id));
        Ok(())
    }

    async fn clear(&self) -> Result<(), SearchableIndexError> {
        self.entries.write().await.clear();
        Ok(())
    }
}
