mod categorize;
mod error;
mod health;
mod index;
mod ingest;
mod maintenance;
mod query;

pub use categorize::categorize_handler;
pub use error::ErrorResponse;
pub use health::health_handler;
pub use index::index_handler;
pub use ingest::{ingest_handler, ingest_images_handler};
pub use maintenance::clear_content_handler;
pub use query::query_handler;
