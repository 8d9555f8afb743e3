use std::sync::Arc;

use crate::application::ports::{ContentStore, SearchableIndex};
use crate::application::services::{DualStoreIndexer, IngestionService, RetrievalService};

#[derive(Clone)]
pub struct AppState {
    pub indexer: Arc<DualStoreIndexer>,
    pub ingestion_service: Arc<IngestionService>,
    pub retrieval_service: Arc<RetrievalService>,
    pub searchable_index: Arc<dyn SearchableIndex>,
    pub content_store: Arc<dyn ContentStore>,
    /// Default metadata key used when a request does not name one.
    pub id_key: String,
}
