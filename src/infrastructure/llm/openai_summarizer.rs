use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::application::ports::{Summarizer, SummarizerError};
use crate::domain::{SummaryInput, image_data_url};

const TEXT_PROMPT: &str = "You are an assistant tasked with summarizing text for retrieval. \
These summaries will be embedded and used to retrieve the raw text. \
Give a concise summary of the text that is well optimized for retrieval.";

const TABLE_PROMPT: &str = "You are an assistant tasked with summarizing tables for retrieval. \
These summaries will be embedded and used to retrieve the raw table. \
Give a concise summary of the table that is well optimized for retrieval.";

const IMAGE_PROMPT: &str = "You are an assistant tasked with summarizing images for retrieval. \
These summaries will be embedded and used to retrieve the raw image. \
Give a concise summary of the image that is well optimized for retrieval.";

/// Summarizes through an OpenAI-compatible `/chat/completions` endpoint.
/// Images are sent inline as `data:` URLs.
pub struct OpenAiSummarizer {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiSummarizer {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        let client = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            max_tokens: 1024,
            temperature: 0.0,
        }
    }

    pub fn with_sampling(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    fn message_content(input: &SummaryInput) -> Value {
        match input {
            SummaryInput::Text(text) => json!(format!("{TEXT_PROMPT}\n\nText:\n{text}")),
            SummaryInput::Table(table) => json!(format!("{TABLE_PROMPT}\n\nTable:\n{table}")),
            SummaryInput::Image(b64) => json!([
                { "type": "text", "text": IMAGE_PROMPT },
                { "type": "image_url", "image_url": { "url": image_data_url(b64) } }
            ]),
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    #[tracing::instrument(skip(self, input), fields(model = %self.model, kind = input.kind()))]
    async fn summarize(&self, input: &SummaryInput) -> Result<String, SummarizerError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": Self::message_content(input) }
            ],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "stream": false
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| SummarizerError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SummarizerError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(SummarizerError::ApiRequestFailed(format!(
                "HTTP {status}: {text}"
            )));
        }

        let raw_bytes = response
            .bytes()
            .await
            .map_err(|e| SummarizerError::ApiRequestFailed(e.to_string()))?;

        let completion: ChatCompletion = serde_json::from_slice(&raw_bytes).map_err(|e| {
            tracing::error!(
                raw_response = %String::from_utf8_lossy(&raw_bytes),
                "Failed to parse chat completion JSON"
            );
            SummarizerError::InvalidResponse(e.to_string())
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| SummarizerError::InvalidResponse("empty completion".to_string()))
    }
}
