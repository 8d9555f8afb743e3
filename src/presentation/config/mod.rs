mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ContentStoreProviderSetting, ContentStoreSettings, EmbeddingProvider, EmbeddingsSettings,
    IndexProviderSetting, IndexSettings, LoggingSettings, RetrievalSettings, ServerSettings,
    Settings, SummarizerSettings,
};
