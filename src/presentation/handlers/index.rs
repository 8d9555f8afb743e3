use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::ErrorResponse;
use crate::application::services::IndexingError;
use crate::domain::ContentId;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct IndexRequest {
    pub summaries: Vec<String>,
    pub raw_contents: Vec<String>,
    /// Must match the configured key when given; retrieval only follows that one.
    pub id_key: Option<String>,
}

#[derive(Serialize)]
pub struct IndexResponse {
    pub ids: Vec<ContentId>,
}

#[tracing::instrument(skip_all, fields(count = request.summaries.len()))]
pub async fn index_handler(
    State(state): State<AppState>,
    Json(request): Json<IndexRequest>,
) -> Response {
    if let Some(requested) = request.id_key.as_deref().filter(|key| *key != state.id_key) {
        tracing::warn!(requested, configured = %state.id_key, "Rejected foreign id key");
        return ErrorResponse::into_response_with(
            StatusCode::BAD_REQUEST,
            format!(
                "id_key '{}' does not match the configured key '{}'",
                requested, state.id_key
            ),
        );
    }

    match state
        .indexer
        .index(&request.summaries, &request.raw_contents, &state.id_key)
        .await
    {
        Ok(ids) => (StatusCode::OK, Json(IndexResponse { ids })).into_response(),
        Err(e @ IndexingError::LengthMismatch { .. }) => {
            tracing::warn!(error = %e, "Rejected index request");
            ErrorResponse::into_response_with(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Indexing failed");
            ErrorResponse::into_response_with(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Indexing failed: {}", e),
            )
        }
    }
}
