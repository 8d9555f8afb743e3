use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::presentation::handlers::{
    categorize_handler, clear_content_handler, health_handler, index_handler, ingest_handler,
    ingest_images_handler, query_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/categorize", post(categorize_handler))
        .route("/api/v1/index", post(index_handler))
        .route("/api/v1/ingest", post(ingest_handler))
        .route("/api/v1/ingest/images", post(ingest_images_handler))
        .route("/api/v1/query", post(query_handler))
        .route("/api/v1/content", delete(clear_content_handler))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
