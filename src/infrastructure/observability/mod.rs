mod init_tracing;
mod payload_preview;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use payload_preview::preview_payload;
pub use tracing_config::TracingConfig;
