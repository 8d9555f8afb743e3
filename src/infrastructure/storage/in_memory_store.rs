use std::collections::BTreeMap;

use futures::StreamExt;
use futures::stream::{self, BoxStream};
use tokio::sync::RwLock;

use crate::application::ports::{ContentStore, ContentStoreError};
use crate::domain::{ContentId, ContentRecord};

#[derive(Default)]
pub struct InMemoryContentStore {
    records: RwLock<BTreeMap<ContentId, Vec<u8>>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ContentStore for InMemoryContentStore {
    async fn upsert(&self, records: &[ContentRecord]) -> Result<(), ContentStoreError> {
        let mut stored = self.records.write().await;
        for record in records {
            stored.insert(record.id, record.bytes.clone());
        }
        Ok(())
    }

    async fn get(&self, ids: &[ContentId]) -> Result<Vec<Option<Vec<u8>>>, ContentStoreError> {
        let stored = self.records.read().await;
        Ok(ids.iter().map(|id| stored.get(id).cloned()).collect())
    }

    fn keys(&self) -> BoxStream<'_, Result<ContentId, ContentStoreError>> {
        stream::once(async move {
            let snapshot: Vec<Result<ContentId, ContentStoreError>> =
                self.records.read().await.keys().copied().map(Ok).collect();
            stream::iter(snapshot)
        })
        .flatten()
        .boxed()
    }

    async fn delete(&self, ids: &[ContentId]) -> Result<(), ContentStoreError> {
        let mut stored = self.records.write().await;
        for id in ids {
            stored.remove(id);
        }
        Ok(())
    }
}
