use std::path::PathBuf;
use std::sync::Arc;

use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};
use tracing::{debug, instrument};

use crate::application::ports::{ContentStore, ContentStoreError};
use crate::domain::{ContentId, ContentRecord};

/// One file per content record, named by its identifier, under `base_path`.
pub struct LocalContentStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalContentStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ContentStoreError> {
        std::fs::create_dir_all(&base_path).map_err(|e| {
            ContentStoreError::InitFailed(format!("{}: {e}", base_path.display()))
        })?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| ContentStoreError::InitFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    fn object_path(id: &ContentId) -> StorePath {
        StorePath::from(id.to_string())
    }
}

#[async_trait::async_trait]
impl ContentStore for LocalContentStore {
    #[instrument(skip_all, fields(count = records.len()))]
    async fn upsert(&self, records: &[ContentRecord]) -> Result<(), ContentStoreError> {
        for record in records {
            self.inner
                .put(
                    &Self::object_path(&record.id),
                    PutPayload::from(record.bytes.clone()),
                )
                .await
                .map_err(|e| ContentStoreError::UpsertFailed(e.to_string()))?;
        }
        debug!(count = records.len(), "content_written");
        Ok(())
    }

    #[instrument(skip_all, fields(count = ids.len()))]
    async fn get(&self, ids: &[ContentId]) -> Result<Vec<Option<Vec<u8>>>, ContentStoreError> {
        let mut payloads = Vec::with_capacity(ids.len());
        for id in ids {
            let payload = match self.inner.get(&Self::object_path(id)).await {
                Ok(result) => Some(
                    result
                        .bytes()
                        .await
                        .map_err(|e| ContentStoreError::ReadFailed(e.to_string()))?
                        .to_vec(),
                ),
                Err(object_store::Error::NotFound { .. }) => None,
                Err(e) => return Err(ContentStoreError::ReadFailed(e.to_string())),
            };
            payloads.push(payload);
        }
        Ok(payloads)
    }

    fn keys(&self) -> BoxStream<'_, Result<ContentId, ContentStoreError>> {
        self.inner
            .list(None)
            .filter_map(|meta| async move {
                match meta {
                    // anything not named by a content id (e.g. in-flight temp files) is skipped
                    Ok(meta) => meta
                        .location
                        .filename()
                        .and_then(|name| name.parse::<ContentId>().ok())
                        .map(Ok),
                    Err(e) => Some(Err(ContentStoreError::ListFailed(e.to_string()))),
                }
            })
            .boxed()
    }

    #[instrument(skip_all, fields(count = ids.len()))]
    async fn delete(&self, ids: &[ContentId]) -> Result<(), ContentStoreError> {
        for id in ids {
            match self.inner.delete(&Self::object_path(id)).await {
                Ok(()) | Err(object_store::Error::NotFound { .. }) => {}
                Err(e) => return Err(ContentStoreError::DeleteFailed(e.to_string())),
            }
        }
        debug!(count = ids.len(), "content_deleted");
        Ok(())
    }
}
