use serde::Serialize;

use super::encoding::decode;
use super::signature::ImageFormat;

const FALLBACK_IMAGE_MIME: &str = "image/jpeg";

/// Enough base64 characters to cover the eight-byte signature window.
const SIGNATURE_PREFIX_CHARS: usize = 12;

/// Retrieved content split for prompt assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromptContext {
    pub images: Vec<String>,
    pub texts_or_tables: Vec<String>,
}

impl PromptContext {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.texts_or_tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len() + self.texts_or_tables.len()
    }

    pub fn image_data_urls(&self) -> Vec<String> {
        self.images.iter().map(|b64| image_data_url(b64)).collect()
    }
}

/// Builds a `data:` URL, sniffing the MIME type from the leading base64 characters.
pub fn image_data_url(b64: &str) -> String {
    let prefix = b64.get(..SIGNATURE_PREFIX_CHARS).unwrap_or(b64);
    let mime = decode(prefix)
        .ok()
        .and_then(|bytes| ImageFormat::sniff(&bytes))
        .map(|format| format.as_mime())
        .unwrap_or(FALLBACK_IMAGE_MIME);

    format!("data:{mime};base64,{b64}")
}
