use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use tvilling::application::ports::Summarizer;
use tvilling::application::services::{DualStoreIndexer, IngestionService, RetrievalService};
use tvilling::infrastructure::llm::{EmbedderFactory, OpenAiSummarizer};
use tvilling::infrastructure::observability::{TracingConfig, init_tracing};
use tvilling::infrastructure::persistence::{JsonSummaryCache, SearchableIndexFactory};
use tvilling::infrastructure::storage::ContentStoreFactory;
use tvilling::infrastructure::text_processing::JsonElementSource;
use tvilling::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::new(
        environment.to_string(),
        &settings.logging.level,
        settings.logging.enable_json,
    ));

    let embedder = EmbedderFactory::create(&settings.embeddings)?;
    let searchable_index = SearchableIndexFactory::create(&settings.index, embedder)?;
    let content_store = ContentStoreFactory::create(&settings.content_store)?;

    let summarizer: Arc<dyn Summarizer> = Arc::new(
        OpenAiSummarizer::new(
            &settings.summarizer.base_url,
            settings.summarizer.api_key.as_deref().unwrap_or_default(),
            &settings.summarizer.model,
        )
        .with_sampling(
            settings.summarizer.max_tokens,
            settings.summarizer.temperature,
        ),
    );

    let indexer = Arc::new(DualStoreIndexer::new(
        Arc::clone(&searchable_index),
        Arc::clone(&content_store),
    ));

    let mut ingestion_service = IngestionService::new(
        Arc::new(JsonElementSource),
        summarizer,
        Arc::clone(&indexer),
        settings.index.id_key.clone(),
    );
    if let Some(dir) = &settings.summarizer.cache_dir {
        tracing::info!(dir = %dir, "Summary cache enabled");
        ingestion_service =
            ingestion_service.with_summary_cache(Arc::new(JsonSummaryCache::new(PathBuf::from(dir))));
    }

    let retrieval_service = Arc::new(RetrievalService::new(
        Arc::clone(&searchable_index),
        Arc::clone(&content_store),
        settings.index.id_key.clone(),
        settings.retrieval.top_k,
    ));

    let state = AppState {
        indexer,
        ingestion_service: Arc::new(ingestion_service),
        retrieval_service,
        searchable_index,
        content_store,
        id_key: settings.index.id_key.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
