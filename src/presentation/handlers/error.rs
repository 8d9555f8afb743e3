use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn into_response_with(status: StatusCode, error: String) -> Response {
        (status, Json(Self { error })).into_response()
    }
}
