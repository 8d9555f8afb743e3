use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::ErrorResponse;
use crate::infrastructure::observability::preview_payload;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct QueryRequest {
    pub question: String,
    pub top_k: Option<usize>,
}

#[derive(Default, Serialize)]
pub struct QueryResponse {
    pub images: Vec<String>,
    pub texts_or_tables: Vec<String>,
    pub image_data_urls: Vec<String>,
}

#[tracing::instrument(skip_all)]
pub async fn query_handler(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Response {
    tracing::debug!(question = %preview_payload(&request.question), "Processing query");

    let result = match request.top_k {
        Some(top_k) => {
            state
                .retrieval_service
                .retrieve_top_k(&request.question, top_k)
                .await
        }
        None => state.retrieval_service.retrieve(&request.question).await,
    };

    match result {
        Ok(context) if context.is_empty() => {
            tracing::info!("Query matched no content");
            (StatusCode::OK, Json(QueryResponse::default())).into_response()
        }
        Ok(context) => {
            tracing::info!(
                total = context.len(),
                images = context.images.len(),
                texts_or_tables = context.texts_or_tables.len(),
                "Query successful"
            );
            let image_data_urls = context.image_data_urls();
            (
                StatusCode::OK,
                Json(QueryResponse {
                    images: context.images,
                    texts_or_tables: context.texts_or_tables,
                    image_data_urls,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Query failed");
            ErrorResponse::into_response_with(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Query failed: {}", e),
            )
        }
    }
}
