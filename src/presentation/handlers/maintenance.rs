use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::ErrorResponse;
use crate::application::services::{clear, reset};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ClearParams {
    #[serde(default)]
    pub include_index: bool,
}

#[derive(Serialize)]
pub struct ClearResponse {
    pub removed: usize,
    pub index_cleared: bool,
}

/// Clears the content store; with `include_index=true` the searchable index too.
#[tracing::instrument(skip_all, fields(include_index = params.include_index))]
pub async fn clear_content_handler(
    State(state): State<AppState>,
    Query(params): Query<ClearParams>,
) -> Response {
    let result = if params.include_index {
        reset(state.searchable_index.as_ref(), state.content_store.as_ref())
            .await
            .map_err(|e| e.to_string())
    } else {
        clear(state.content_store.as_ref())
            .await
            .map_err(|e| e.to_string())
    };

    match result {
        Ok(removed) => (
            StatusCode::OK,
            Json(ClearResponse {
                removed,
                index_cleared: params.include_index,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Clear failed");
            ErrorResponse::into_response_with(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Clear failed: {}", e),
            )
        }
    }
}
