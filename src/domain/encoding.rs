use std::io;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose};

#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Standard alphabet with padding, the same alphabet `looks_like_base64_syntax` accepts.
pub fn encode(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

pub fn decode(text: &str) -> Result<Vec<u8>, EncodingError> {
    Ok(general_purpose::STANDARD.decode(text)?)
}

/// Reads an image file and returns its base64 text. The bytes are not sniffed.
pub async fn encode_image(path: impl AsRef<Path>) -> Result<String, EncodingError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(encode(&bytes))
}
