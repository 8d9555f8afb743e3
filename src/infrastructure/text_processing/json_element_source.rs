use async_trait::async_trait;

use crate::application::ports::{ElementSource, ElementSourceError};
use crate::domain::Element;

/// Reads partitioner output already serialized as a JSON array of
/// `{"type": ..., "text": ...}` objects.
pub struct JsonElementSource;

#[async_trait]
impl ElementSource for JsonElementSource {
    #[tracing::instrument(skip_all, fields(bytes = data.len()))]
    async fn elements(&self, data: &[u8]) -> Result<Vec<Element>, ElementSourceError> {
        let elements: Vec<Element> = serde_json::from_slice(data)
            .map_err(|e| ElementSourceError::InvalidPayload(e.to_string()))?;

        tracing::debug!(count = elements.len(), "elements_parsed");
        Ok(elements)
    }
}
