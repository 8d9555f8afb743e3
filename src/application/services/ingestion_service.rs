use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::categorizer::categorize;
use super::dual_store_indexer::{DualStoreIndexer, IndexingError};
use crate::application::ports::{
    ElementSource, ElementSourceError, Summarizer, SummarizerError, SummaryCache,
};
use crate::domain::{ContentId, EncodingError, SummaryInput, encode_image};

/// Partitioner output in, linked summaries and raw content out.
pub struct IngestionService {
    element_source: Arc<dyn ElementSource>,
    summarizer: Arc<dyn Summarizer>,
    indexer: Arc<DualStoreIndexer>,
    summary_cache: Option<Arc<dyn SummaryCache>>,
    id_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestionReport {
    pub text_ids: Vec<ContentId>,
    pub table_ids: Vec<ContentId>,
    pub skipped: usize,
}

impl IngestionService {
    pub fn new(
        element_source: Arc<dyn ElementSource>,
        summarizer: Arc<dyn Summarizer>,
        indexer: Arc<DualStoreIndexer>,
        id_key: String,
    ) -> Self {
        Self {
            element_source,
            summarizer,
            indexer,
            summary_cache: None,
            id_key,
        }
    }

    pub fn with_summary_cache(mut self, cache: Arc<dyn SummaryCache>) -> Self {
        self.summary_cache = Some(cache);
        self
    }

    #[tracing::instrument(skip_all, fields(bytes = data.len()))]
    pub async fn ingest_document(&self, data: &[u8]) -> Result<IngestionReport, IngestionError> {
        let elements = self.element_source.elements(data).await?;
        let total = elements.len();

        let categorized = categorize(elements);
        let skipped = total - categorized.len();
        debug!(
            texts = categorized.texts.len(),
            tables = categorized.tables.len(),
            skipped,
            "elements_categorized"
        );

        let text_summaries = self
            .summaries_for(&categorized.texts, SummaryInput::Text)
            .await?;
        let table_summaries = self
            .summaries_for(&categorized.tables, SummaryInput::Table)
            .await?;

        let text_ids = self
            .indexer
            .index(&text_summaries, &categorized.texts, &self.id_key)
            .await?;
        let table_ids = self
            .indexer
            .index(&table_summaries, &categorized.tables, &self.id_key)
            .await?;

        info!(
            texts = text_ids.len(),
            tables = table_ids.len(),
            skipped,
            "document_ingested"
        );

        Ok(IngestionReport {
            text_ids,
            table_ids,
            skipped,
        })
    }

    /// Images arrive base64-encoded and are stored exactly as given.
    #[tracing::instrument(skip_all, fields(count = images.len()))]
    pub async fn ingest_images(&self, images: &[String]) -> Result<Vec<ContentId>, IngestionError> {
        let summaries = self.summaries_for(images, SummaryInput::Image).await?;
        let ids = self.indexer.index(&summaries, images, &self.id_key).await?;
        info!(images = ids.len(), "images_ingested");
        Ok(ids)
    }

    /// Every file is read before anything is summarized, so one unreadable
    /// path leaves both stores untouched.
    #[tracing::instrument(skip_all, fields(count = paths.len()))]
    pub async fn ingest_image_files(
        &self,
        paths: &[PathBuf],
    ) -> Result<Vec<ContentId>, IngestionError> {
        let mut images = Vec::with_capacity(paths.len());
        for path in paths {
            let image = encode_image(path).await.map_err(|source| {
                warn!(path = %path.display(), error = %source, "image_file_unreadable");
                IngestionError::Encoding(source)
            })?;
            images.push(image);
        }
        debug!(count = images.len(), "image_files_encoded");

        self.ingest_images(&images).await
    }

    async fn summaries_for(
        &self,
        contents: &[String],
        wrap: fn(String) -> SummaryInput,
    ) -> Result<Vec<String>, IngestionError> {
        if contents.is_empty() {
            return Ok(Vec::new());
        }

        let kind = wrap(String::new()).kind();
        let cache_key = cache_key(kind, contents);

        if let Some(cached) = self.cached_summaries(&cache_key, contents.len()).await {
            return Ok(cached);
        }

        let mut summaries = Vec::with_capacity(contents.len());
        for content in contents {
            let summary = self.summarizer.summarize(&wrap(content.clone())).await?;
            summaries.push(summary);
        }
        debug!(kind, count = summaries.len(), "summaries_generated");

        if let Some(cache) = &self.summary_cache {
            if let Err(e) = cache.save(&cache_key, &summaries).await {
                warn!(error = %e, key = %cache_key, "summary_cache_write_failed");
            }
        }

        Ok(summaries)
    }

    async fn cached_summaries(&self, key: &str, expected: usize) -> Option<Vec<String>> {
        let cache = self.summary_cache.as_ref()?;
        match cache.load(key).await {
            Ok(Some(cached)) if cached.len() == expected => {
                debug!(key, count = cached.len(), "summary_cache_hit");
                Some(cached)
            }
            Ok(Some(cached)) => {
                warn!(
                    key,
                    cached = cached.len(),
                    expected,
                    "summary_cache_length_mismatch"
                );
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, key, "summary_cache_read_failed");
                None
            }
        }
    }
}

/// Same inputs map to the same key across runs.
fn cache_key(kind: &str, contents: &[String]) -> String {
    let fingerprint = Uuid::new_v5(&Uuid::NAMESPACE_OID, contents.join("\u{1e}").as_bytes());
    format!("{kind}_summaries_{}", fingerprint.simple())
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("element source: {0}")]
    ElementSource(#[from] ElementSourceError),
    #[error("encoding: {0}")]
    Encoding(#[from] EncodingError),
    #[error("summarization: {0}")]
    Summarization(#[from] SummarizerError),
    #[error("indexing: {0}")]
    Indexing(#[from] IndexingError),
}
