use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub index: IndexSettings,
    pub embeddings: EmbeddingsSettings,
    pub content_store: ContentStoreSettings,
    pub summarizer: SummarizerSettings,
    pub retrieval: RetrievalSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexSettings {
    pub provider: IndexProviderSetting,
    pub qdrant_url: String,
    pub collection_name: String,
    /// Metadata key under which each summary carries its content identifier.
    pub id_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexProviderSetting {
    Memory,
    Qdrant,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingsSettings {
    pub provider: EmbeddingProvider,
    pub model: String,
    pub dimension: usize,
    pub base_url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProvider {
    Hashing,
    #[serde(rename = "openai")]
    OpenAi,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentStoreSettings {
    pub provider: ContentStoreProviderSetting,
    pub local_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStoreProviderSetting {
    Memory,
    Local,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Directory for cached summaries; caching is off when unset.
    pub cache_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalSettings {
    pub top_k: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.<environment>` (any format `config` reads, optional),
    /// then `APP_`-prefixed variables with `__` between sections, e.g. `APP_SERVER__PORT`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    fn builder(
        environment: Environment,
    ) -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("index.provider", "memory")?
            .set_default("index.qdrant_url", "http://localhost:6334")?
            .set_default("index.collection_name", "summaries")?
            .set_default("index.id_key", "doc_id")?
            .set_default("embeddings.provider", "hashing")?
            .set_default("embeddings.model", "text-embedding-3-small")?
            .set_default("embeddings.dimension", 384)?
            .set_default("embeddings.base_url", "https://api.openai.com/v1")?
            .set_default("content_store.provider", "memory")?
            .set_default("content_store.local_path", "./content-store")?
            .set_default("summarizer.base_url", "https://api.openai.com/v1")?
            .set_default("summarizer.model", "gpt-4o-mini")?
            .set_default("summarizer.max_tokens", 1024)?
            .set_default("summarizer.temperature", 0.0)?
            .set_default("retrieval.top_k", 4)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            ))
    }
}
