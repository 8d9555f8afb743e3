use axum::Json;
use serde::Serialize;

use crate::application::services::categorize;
use crate::domain::Element;

#[derive(Serialize)]
pub struct CategorizeResponse {
    pub texts: Vec<String>,
    pub tables: Vec<String>,
    pub skipped: usize,
}

/// Accepts a raw partitioner element array.
pub async fn categorize_handler(Json(elements): Json<Vec<Element>>) -> Json<CategorizeResponse> {
    let total = elements.len();
    let categorized = categorize(elements);
    let skipped = total - categorized.len();

    Json(CategorizeResponse {
        texts: categorized.texts,
        tables: categorized.tables,
        skipped,
    })
}
