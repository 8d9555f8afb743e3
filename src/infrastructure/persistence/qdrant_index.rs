use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use qdrant_client::Qdrant;
use qdrant_client::qdrant::point_id::PointIdOptions;
use qdrant_client::qdrant::{
    CreateCollectionBuilder, DeletePointsBuilder, Distance, PointId, PointStruct, PointsIdsList,
    SearchPointsBuilder, UpsertPointsBuilder, VectorParamsBuilder, VectorsConfig,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::application::ports::{Embedder, SearchHit, SearchableIndex, SearchableIndexError};
use crate::domain::{ContentId, SummaryRecord};

const TEXT_FIELD: &str = "text";
const METADATA_FIELD: &str = "metadata";

/// Summaries as Qdrant points: point id is the content id, payload carries the
/// summary text and its metadata (JSON-encoded). The collection is created on
/// first write with the embedder's dimensionality.
pub struct QdrantSearchableIndex {
    client: Arc<Qdrant>,
    collection_name: String,
    embedder: Arc<dyn Embedder>,
}

impl QdrantSearchableIndex {
    pub fn new(
        url: &str,
        collection_name: String,
        embedder: Arc<dyn Embedder>,
    ) -> Result<Self, SearchableIndexError> {
        let client = Qdrant::from_url(url)
            .build()
            .map_err(|e| SearchableIndexError::ConnectionFailed(e.to_string()))?;

        Ok(Self::with_client(Arc::new(client), collection_name, embedder))
    }

    pub fn with_client(
        client: Arc<Qdrant>,
        collection_name: String,
        embedder: Arc<dyn Embedder>,
    ) -> Self {
        Self {
            client,
            collection_name,
            embedder,
        }
    }

    async fn collection_exists(&self) -> Result<bool, SearchableIndexError> {
        self.client
            .collection_exists(&self.collection_name)
            .await
            .map_err(|e| SearchableIndexError::ConnectionFailed(e.to_string()))
    }

    async fn ensure_collection(&self, dimensions: u64) -> Result<(), SearchableIndexError> {
        if self.collection_exists().await? {
            return Ok(());
        }

        let vectors_config =
            VectorsConfig::from(VectorParamsBuilder::new(dimensions, Distance::Cosine));

        self.client
            .create_collection(
                CreateCollectionBuilder::new(&self.collection_name).vectors_config(vectors_config),
            )
            .await
            .map_err(|e| SearchableIndexError::CollectionCreationFailed(e.to_string()))?;

        info!(collection = %self.collection_name, dimensions, "collection_created");
        Ok(())
    }

    fn point_id(id: &ContentId) -> PointId {
        PointId::from(id.to_string())
    }

    fn record_from_point(
        id: Option<PointId>,
        payload: &HashMap<String, qdrant_client::qdrant::Value>,
    ) -> Option<SummaryRecord> {
        let uuid = match id?.point_id_options? {
            PointIdOptions::Uuid(uuid) => Uuid::parse_str(&uuid).ok()?,
            PointIdOptions::Num(_) => return None,
        };

        let text = payload.get(TEXT_FIELD)?.as_str()?.to_string();
        let metadata = payload
            .get(METADATA_FIELD)
            .and_then(|v| v.as_str())
            .and_then(|raw| serde_json::from_str::<HashMap<String, String>>(raw).ok())
            .unwrap_or_default();

        Some(SummaryRecord {
            id: ContentId::from_uuid(uuid),
            text,
            metadata,
        })
    }
}

#[async_trait]
impl SearchableIndex for QdrantSearchableIndex {
    #[instrument(skip_all, fields(collection = %self.collection_name, count = records.len()))]
    async fn add_records(&self, records: &[SummaryRecord]) -> Result<(), SearchableIndexError> {
        if records.is_empty() {
            return Ok(());
        }

        let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;

        if embeddings.len() != records.len() {
            return Err(SearchableIndexError::UpsertFailed(
                "records and embeddings count mismatch".to_string(),
            ));
        }

        self.ensure_collection(embeddings[0].dimensions() as u64)
            .await?;

        let mut points = Vec::with_capacity(records.len());
        for (record, embedding) in records.iter().zip(embeddings) {
            let metadata = serde_json::to_string(&record.metadata)
                .map_err(|e| SearchableIndexError::UpsertFailed(e.to_string()))?;

            let mut payload: HashMap<String, serde_json::Value> = HashMap::new();
            payload.insert(
                TEXT_FIELD.to_string(),
                serde_json::Value::String(record.text.clone()),
            );
            payload.insert(
                METADATA_FIELD.to_string(),
                serde_json::Value::String(metadata),
            );

            points.push(PointStruct::new(
                Self::point_id(&record.id),
                embedding.values,
                payload,
            ));
        }

        self.client
            .upsert_points(UpsertPointsBuilder::new(&self.collection_name, points).wait(true))
            .await
            .map_err(|e| SearchableIndexError::UpsertFailed(e.to_string()))?;

        info!(collection = %self.collection_name, count = records.len(), "summaries_upserted");
        Ok(())
    }

    #[instrument(skip(self, query), fields(collection = %self.collection_name))]
    async fn similarity_search(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchHit>, SearchableIndexError> {
        if top_k == 0 || !self.collection_exists().await? {
            return Ok(Vec::new());
        }

        let embedding = self.embedder.embed(query).await?;

        let response = self
            .client
            .search_points(
                SearchPointsBuilder::new(&self.collection_name, embedding.values, top_k as u64)
                    .with_payload(true),
            )
            .await
            .map_err(|e| SearchableIndexError::SearchFailed(e.to_string()))?;

        let hits = response
            .result
            .into_iter()
            .filter_map(|point| {
                let score = point.score;
                match Self::record_from_point(point.id, &point.payload) {
                    Some(record) => Some(SearchHit { record, score }),
                    None => {
                        warn!(collection = %self.collection_name, "unreadable_point_skipped");
                        None
                    }
                }
            })
            .collect();

        Ok(hits)
    }

    #[instrument(skip_all, fields(collection = %self.collection_name, count = ids.len()))]
    async fn delete(&self, ids: &[ContentId]) -> Result<(), SearchableIndexError> {
        if ids.is_empty() || !self.collection_exists().await? {
            return Ok(());
        }

        let point_ids: Vec<PointId> = ids.iter().map(Self::point_id).collect();

        self.client
            .delete_points(
                DeletePointsBuilder::new(&self.collection_name)
                    .points(PointsIdsList { ids: point_ids })
                    .wait(true),
            )
            .await
            .map_err(|e| SearchableIndexError::DeleteFailed(e.to_string()))?;

        info!(collection = %self.collection_name, count = ids.len(), "summaries_deleted");
        Ok(())
    }

    #[instrument(skip(self), fields(collection = %self.collection_name))]
    async fn clear(&self) -> Result<(), SearchableIndexError> {
        if !self.collection_exists().await? {
            return Ok(());
        }

        self.client
            .delete_collection(&self.collection_name)
            .await
            .map_err(|e| SearchableIndexError::CollectionDeletionFailed(e.to_string()))?;

        info!(collection = %self.collection_name, "collection_deleted");
        Ok(())
    }
}
