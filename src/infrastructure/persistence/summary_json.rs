use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::application::ports::{SummaryCache, SummaryCacheError};

/// Writes summaries as a pretty-printed UTF-8 JSON array (four-space indent,
/// non-ASCII kept as-is).
pub async fn write_to_json(
    summaries: &[String],
    json_path: impl AsRef<Path>,
) -> Result<(), SummaryCacheError> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    summaries.serialize(&mut serializer)?;

    tokio::fs::write(json_path, buffer).await?;
    Ok(())
}

pub async fn read_from_json(json_path: impl AsRef<Path>) -> Result<Vec<String>, SummaryCacheError> {
    let bytes = tokio::fs::read(json_path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// One JSON file per cache key under a directory.
pub struct JsonSummaryCache {
    dir: PathBuf,
}

impl JsonSummaryCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl SummaryCache for JsonSummaryCache {
    async fn load(&self, key: &str) -> Result<Option<Vec<String>>, SummaryCacheError> {
        let path = self.path_for(key);
        if !tokio::fs::try_exists(&path).await? {
            return Ok(None);
        }
        read_from_json(&path).await.map(Some)
    }

    async fn save(&self, key: &str, summaries: &[String]) -> Result<(), SummaryCacheError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        write_to_json(summaries, self.path_for(key)).await
    }
}
