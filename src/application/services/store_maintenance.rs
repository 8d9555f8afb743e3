use futures::TryStreamExt;
use tracing::{debug, info};

use crate::application::ports::{
    ContentStore, ContentStoreError, SearchableIndex, SearchableIndexError,
};
use crate::domain::ContentId;

/// Deletes every key in the content store with a single bulk delete. Keys are
/// fully collected before deleting so the store is never mutated mid-listing.
/// The searchable index is left untouched; see [`reset`].
pub async fn clear(store: &dyn ContentStore) -> Result<usize, ContentStoreError> {
    let keys: Vec<ContentId> = store.keys().try_collect().await?;

    if keys.is_empty() {
        debug!("content_store_already_empty");
        return Ok(0);
    }

    store.delete(&keys).await?;
    info!(count = keys.len(), "content_store_cleared");

    Ok(keys.len())
}

/// Clears the content store, then the searchable index.
pub async fn reset(
    index: &dyn SearchableIndex,
    store: &dyn ContentStore,
) -> Result<usize, MaintenanceError> {
    let removed = clear(store).await?;
    index.clear().await?;
    info!(removed, "stores_reset");
    Ok(removed)
}

#[derive(Debug, thiserror::Error)]
pub enum MaintenanceError {
    #[error("content store: {0}")]
    ContentStore(#[from] ContentStoreError),
    #[error("searchable index: {0}")]
    Index(#[from] SearchableIndexError),
}
