mod embedder_factory;
mod hashing_embedder;
mod openai_embedder;
mod openai_summarizer;

pub use embedder_factory::{EmbedderFactory, EmbedderFactoryError};
pub use hashing_embedder::HashingEmbedder;
pub use openai_embedder::OpenAiEmbedder;
pub use openai_summarizer::OpenAiSummarizer;
