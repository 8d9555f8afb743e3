use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::ErrorResponse;
use crate::application::services::IngestionError;
use crate::domain::ContentId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct IngestResponse {
    pub text_ids: Vec<ContentId>,
    pub table_ids: Vec<ContentId>,
    pub skipped: usize,
}

#[derive(Deserialize)]
pub struct IngestImagesRequest {
    /// Base64-encoded image files.
    pub images: Vec<String>,
}

#[derive(Serialize)]
pub struct IngestImagesResponse {
    pub ids: Vec<ContentId>,
}

/// Body is partitioner output, passed through to the element source untouched.
#[tracing::instrument(skip_all, fields(bytes = body.len()))]
pub async fn ingest_handler(State(state): State<AppState>, body: Bytes) -> Response {
    match state.ingestion_service.ingest_document(&body).await {
        Ok(report) => (
            StatusCode::OK,
            Json(IngestResponse {
                text_ids: report.text_ids,
                table_ids: report.table_ids,
                skipped: report.skipped,
            }),
        )
            .into_response(),
        Err(e) => ingestion_failure(e),
    }
}

#[tracing::instrument(skip_all, fields(count = request.images.len()))]
pub async fn ingest_images_handler(
    State(state): State<AppState>,
    Json(request): Json<IngestImagesRequest>,
) -> Response {
    match state.ingestion_service.ingest_images(&request.images).await {
        Ok(ids) => (StatusCode::OK, Json(IngestImagesResponse { ids })).into_response(),
        Err(e) => ingestion_failure(e),
    }
}

fn ingestion_failure(error: IngestionError) -> Response {
    let status = match error {
        IngestionError::ElementSource(_) | IngestionError::Encoding(_) => StatusCode::BAD_REQUEST,
        IngestionError::Summarization(_) => StatusCode::BAD_GATEWAY,
        IngestionError::Indexing(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::error!(error = %error, status = %status, "Ingestion failed");
    ErrorResponse::into_response_with(status, format!("Ingestion failed: {}", error))
}
