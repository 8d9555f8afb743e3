mod content_store;
mod element_source;
mod embedder;
mod search_hit;
mod searchable_index;
mod searchable_index_error;
mod summarizer;
mod summary_cache;

pub use content_store::{ContentStore, ContentStoreError};
pub use element_source::{ElementSource, ElementSourceError};
pub use embedder::{Embedder, EmbedderError};
pub use search_hit::SearchHit;
pub use searchable_index::SearchableIndex;
pub use searchable_index_error::SearchableIndexError;
pub use summarizer::{Summarizer, SummarizerError};
pub use summary_cache::{SummaryCache, SummaryCacheError};
