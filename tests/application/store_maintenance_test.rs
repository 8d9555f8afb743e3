use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use tvilling::application::ports::{ContentStore, ContentStoreError, SearchableIndex};
use tvilling::application::services::{DualStoreIndexer, MaintenanceError, clear, reset};
use tvilling::domain::{ContentId, ContentRecord};
use tvilling::infrastructure::llm::HashingEmbedder;
use tvilling::infrastructure::persistence::InMemorySearchableIndex;
use tvilling::infrastructure::storage::InMemoryContentStore;

/// Delegates to an in-memory store and counts bulk delete calls.
#[derive(Default)]
struct CountingStore {
    inner: InMemoryContentStore,
    deletes: AtomicUsize,
}

#[async_trait]
impl ContentStore for CountingStore {
    async fn upsert(&self, records: &[ContentRecord]) -> Result<(), ContentStoreError> {
        self.inner.upsert(records).await
    }

    async fn get(&self, ids: &[ContentId]) -> Result<Vec<Option<Vec<u8>>>, ContentStoreError> {
        self.inner.get(ids).await
    }

    fn keys(&self) -> BoxStream<'_, Result<ContentId, ContentStoreError>> {
        self.inner.keys()
    }

    async fn delete(&self, ids: &[ContentId]) -> Result<(), ContentStoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(ids).await
    }
}

struct BrokenListingStore;

#[async_trait]
impl ContentStore for BrokenListingStore {
    async fn upsert(&self, _records: &[ContentRecord]) -> Result<(), ContentStoreError> {
        Ok(())
    }

    async fn get(&self, ids: &[ContentId]) -> Result<Vec<Option<Vec<u8>>>, ContentStoreError> {
        Ok(vec![None; ids.len()])
    }

    fn keys(&self) -> BoxStream<'_, Result<ContentId, ContentStoreError>> {
        stream::iter(vec![
            Ok(ContentId::new()),
            Err(ContentStoreError::ListFailed("bucket gone".to_string())),
        ])
        .boxed()
    }

    async fn delete(&self, _ids: &[ContentId]) -> Result<(), ContentStoreError> {
        panic!("delete must not run after a listing failure");
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn given_populated_store_when_clearing_then_all_keys_removed_in_one_call() {
    let store = CountingStore::default();
    let records: Vec<ContentRecord> = (0..3)
        .map(|i| ContentRecord::from_text(ContentId::new(), &format!("raw {i}")))
        .collect();
    store.upsert(&records).await.unwrap();

    let removed = clear(&store).await.unwrap();

    assert_eq!(removed, 3);
    assert_eq!(store.deletes.load(Ordering::SeqCst), 1);
    assert!(store.inner.is_empty().await);
}

#[tokio::test]
async fn given_empty_store_when_clearing_then_no_delete_issued() {
    let store = CountingStore::default();

    let removed = clear(&store).await.unwrap();

    assert_eq!(removed, 0);
    assert_eq!(store.deletes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_listing_failure_when_clearing_then_error_and_nothing_deleted() {
    let result = clear(&BrokenListingStore).await;
    assert!(matches!(result, Err(ContentStoreError::ListFailed(_))));
}

#[tokio::test]
async fn given_indexed_pairs_when_clearing_then_index_keeps_summaries() {
    let index = Arc::new(InMemorySearchableIndex::new(Arc::new(HashingEmbedder::default())));
    let store = Arc::new(InMemoryContentStore::new());
    DualStoreIndexer::new(index.clone(), store.clone())
        .index(&strings(&["s1", "s2"]), &strings(&["r1", "r2"]), "doc_id")
        .await
        .unwrap();

    let removed = clear(store.as_ref()).await.unwrap();

    assert_eq!(removed, 2);
    assert!(store.is_empty().await);
    assert_eq!(index.len().await, 2);
}

#[tokio::test]
async fn given_indexed_pairs_when_resetting_then_both_stores_empty() {
    let index = Arc::new(InMemorySearchableIndex::new(Arc::new(HashingEmbedder::default())));
    let store = Arc::new(InMemoryContentStore::new());
    DualStoreIndexer::new(index.clone(), store.clone())
        .index(&strings(&["s1"]), &strings(&["r1"]), "doc_id")
        .await
        .unwrap();

    let removed = reset(index.as_ref(), store.as_ref()).await.unwrap();

    assert_eq!(removed, 1);
    assert!(store.is_empty().await);
    assert!(index.is_empty().await);
    assert!(index.similarity_search("s1", 4).await.unwrap().is_empty());
}

#[tokio::test]
async fn given_listing_failure_when_resetting_then_index_left_alone() {
    let index = Arc::new(InMemorySearchableIndex::new(Arc::new(HashingEmbedder::default())));
    DualStoreIndexer::new(index.clone(), Arc::new(InMemoryContentStore::new()))
        .index(&strings(&["s1"]), &strings(&["r1"]), "doc_id")
        .await
        .unwrap();

    let result = reset(index.as_ref(), &BrokenListingStore).await;

    assert!(matches!(result, Err(MaintenanceError::ContentStore(_))));
    assert_eq!(index.len().await, 1);
}
