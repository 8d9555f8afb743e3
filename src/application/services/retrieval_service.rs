use std::sync::Arc;

use tracing::{debug, warn};

use super::retrieval_demultiplexer::split;
use crate::application::ports::{
    ContentStore, ContentStoreError, SearchableIndex, SearchableIndexError,
};
use crate::domain::{ContentId, PromptContext};

/// Resolves a question to raw content: summaries are searched, their linked
/// identifiers looked up in the content store, and the payloads demultiplexed.
pub struct RetrievalService {
    index: Arc<dyn SearchableIndex>,
    store: Arc<dyn ContentStore>,
    id_key: String,
    top_k: usize,
}

impl RetrievalService {
    pub fn new(
        index: Arc<dyn SearchableIndex>,
        store: Arc<dyn ContentStore>,
        id_key: String,
        top_k: usize,
    ) -> Self {
        Self {
            index,
            store,
            id_key,
            top_k,
        }
    }

    pub async fn retrieve(&self, question: &str) -> Result<PromptContext, RetrievalError> {
        self.retrieve_top_k(question, self.top_k).await
    }

    #[tracing::instrument(skip(self, question), fields(id_key = %self.id_key))]
    pub async fn retrieve_top_k(
        &self,
        question: &str,
        top_k: usize,
    ) -> Result<PromptContext, RetrievalError> {
        let hits = self.index.similarity_search(question, top_k).await?;

        let mut ids: Vec<ContentId> = Vec::with_capacity(hits.len());
        for hit in &hits {
            match hit.record.linked_id(&self.id_key) {
                Some(id) if !ids.contains(&id) => ids.push(id),
                Some(_) => {}
                None => warn!(summary_id = %hit.record.id, "hit_without_linked_id"),
            }
        }

        if ids.is_empty() {
            debug!("no_linked_content");
            return Ok(PromptContext::default());
        }

        let payloads = self.store.get(&ids).await?;
        let resolved: Vec<Vec<u8>> = ids
            .iter()
            .zip(payloads)
            .filter_map(|(id, payload)| {
                if payload.is_none() {
                    warn!(content_id = %id, "linked_content_missing");
                }
                payload
            })
            .collect();

        let context = split(&resolved);
        debug!(
            images = context.images.len(),
            texts_or_tables = context.texts_or_tables.len(),
            "context_assembled"
        );

        Ok(context)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("search: {0}")]
    Search(#[from] SearchableIndexError),
    #[error("content store: {0}")]
    ContentStore(#[from] ContentStoreError),
}
