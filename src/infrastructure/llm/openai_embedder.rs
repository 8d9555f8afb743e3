use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{Embedder, EmbedderError};
use crate::domain::Embedding;

/// Any server speaking the OpenAI `/embeddings` API.
pub struct OpenAiEmbedder {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a [&'a str],
    model: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

/// Servers may answer out of order; `index` points back at the input position.
#[derive(Deserialize)]
struct EmbeddingData {
    #[serde(default)]
    index: usize,
    embedding: Vec<f32>,
}

impl OpenAiEmbedder {
    pub fn new(base_url: &str, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/embeddings", base_url.trim_end_matches('/')),
            api_key,
            model,
        }
    }

    async fn request(&self, texts: &[&str]) -> Result<EmbeddingResponse, EmbedderError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&EmbeddingRequest {
                input: texts,
                model: &self.model,
            })
            .send()
            .await
            .map_err(|e| EmbedderError::ApiRequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => Err(EmbedderError::RateLimited),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(EmbedderError::ApiRequestFailed(format!("HTTP {status}: {body}")))
            }
            _ => response
                .json()
                .await
                .map_err(|e| EmbedderError::InvalidResponse(e.to_string())),
        }
    }
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedderError> {
        let mut batch = self.embed_batch(&[text]).await?;
        batch
            .pop()
            .ok_or_else(|| EmbedderError::InvalidResponse("no embedding returned".to_string()))
    }

    #[tracing::instrument(skip(self, texts), fields(model = %self.model, count = texts.len()))]
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut data = self.request(texts).await?.data;
        if data.len() != texts.len() {
            return Err(EmbedderError::InvalidResponse(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                data.len()
            )));
        }

        data.sort_by_key(|d| d.index);
        Ok(data.into_iter().map(|d| Embedding::new(d.embedding)).collect())
    }
}
