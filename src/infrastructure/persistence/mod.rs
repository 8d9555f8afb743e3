mod index_factory;
mod in_memory_index;
mod qdrant_index;
mod summary_json;

pub use index_factory::SearchableIndexFactory;
pub use in_memory_index::InMemorySearchableIndex;
pub use qdrant_index::QdrantSearchableIndex;
pub use summary_json::{JsonSummaryCache, read_from_json, write_to_json};
