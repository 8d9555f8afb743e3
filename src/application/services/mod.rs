mod categorizer;
mod dual_store_indexer;
mod ingestion_service;
mod retrieval_demultiplexer;
mod retrieval_service;
mod store_maintenance;

pub use categorizer::{CategorizedElements, categorize};
pub use dual_store_indexer::{DualStoreIndexer, IndexingError};
pub use ingestion_service::{IngestionError, IngestionReport, IngestionService};
pub use retrieval_demultiplexer::split;
pub use retrieval_service::{RetrievalError, RetrievalService};
pub use store_maintenance::{MaintenanceError, clear, reset};
