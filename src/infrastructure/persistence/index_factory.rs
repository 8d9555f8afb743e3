use std::sync::Arc;

use crate::application::ports::{Embedder, SearchableIndex, SearchableIndexError};
use crate::presentation::config::{IndexProviderSetting, IndexSettings};

use super::{InMemorySearchableIndex, QdrantSearchableIndex};

pub struct SearchableIndexFactory;

impl SearchableIndexFactory {
    pub fn create(
        settings: &IndexSettings,
        embedder: Arc<dyn Embedder>,
    ) -> Result<Arc<dyn SearchableIndex>, SearchableIndexError> {
        match settings.provider {
            IndexProviderSetting::Memory => {
                tracing::info!("Using in-memory searchable index");
                Ok(Arc::new(InMemorySearchableIndex::new(embedder)))
            }
            IndexProviderSetting::Qdrant => {
                tracing::info!(
                    url = %settings.qdrant_url,
                    collection = %settings.collection_name,
                    "Using Qdrant searchable index"
                );
                let index = QdrantSearchableIndex::new(
                    &settings.qdrant_url,
                    settings.collection_name.clone(),
                    embedder,
                )?;
                Ok(Arc::new(index))
            }
        }
    }
}
