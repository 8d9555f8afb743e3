use std::collections::HashMap;

use super::content_id::ContentId;

/// A summary as submitted to the searchable index, tagged with `{id_key: id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRecord {
    pub id: ContentId,
    pub text: String,
    pub metadata: HashMap<String, String>,
}

impl SummaryRecord {
    pub fn new(id: ContentId, text: String, id_key: &str) -> Self {
        let mut metadata = HashMap::new();
        metadata.insert(id_key.to_string(), id.to_string());
        Self { id, text, metadata }
    }

    /// Reads back the content identifier stored under `id_key`.
    pub fn linked_id(&self, id_key: &str) -> Option<ContentId> {
        self.metadata.get(id_key)?.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRecord {
    pub id: ContentId,
    pub bytes: Vec<u8>,
}

impl ContentRecord {
    pub fn new(id: ContentId, bytes: Vec<u8>) -> Self {
        Self { id, bytes }
    }

    /// Plain UTF-8 bytes of the text. Base64 image strings are stored as their
    /// ASCII text, not decoded.
    pub fn from_text(id: ContentId, text: &str) -> Self {
        Self::new(id, text.as_bytes().to_vec())
    }
}
