use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ContentStore, ContentStoreError};
use crate::presentation::config::{ContentStoreProviderSetting, ContentStoreSettings};

use super::in_memory_store::InMemoryContentStore;
use super::local_store::LocalContentStore;

pub struct ContentStoreFactory;

impl ContentStoreFactory {
    pub fn create(
        settings: &ContentStoreSettings,
    ) -> Result<Arc<dyn ContentStore>, ContentStoreError> {
        match settings.provider {
            ContentStoreProviderSetting::Memory => {
                tracing::info!("Using in-memory content store");
                Ok(Arc::new(InMemoryContentStore::new()))
            }
            ContentStoreProviderSetting::Local => {
                tracing::info!(path = %settings.local_path, "Using local content store");
                let store = LocalContentStore::new(PathBuf::from(&settings.local_path))?;
                Ok(Arc::new(store))
            }
        }
    }
}
