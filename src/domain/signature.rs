use std::sync::LazyLock;

use regex::Regex;

use super::encoding::decode;

const HEADER_LEN: usize = 8;

static BASE64_SYNTAX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/]+={0,2}$").unwrap());

const SIGNATURES: [(ImageFormat, &[u8]); 4] = [
    (ImageFormat::Jpeg, &[0xFF, 0xD8, 0xFF]),
    (
        ImageFormat::Png,
        &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
    ),
    (ImageFormat::Gif, &[0x47, 0x49, 0x46, 0x38]),
    (ImageFormat::Webp, &[0x52, 0x49, 0x46, 0x46]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageFormat {
    /// Matches the first eight bytes against the known magic prefixes.
    /// A header sniff only: the rest of the buffer is never inspected.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        let header = &data[..data.len().min(HEADER_LEN)];
        SIGNATURES
            .iter()
            .find(|(_, magic)| header.starts_with(magic))
            .map(|(format, _)| *format)
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }
}

pub fn is_image(data: &[u8]) -> bool {
    ImageFormat::sniff(data).is_some()
}

/// Cheap pre-filter run before attempting a base64 decode. Says nothing about
/// whether the decoded bytes are an image.
pub fn looks_like_base64_syntax(text: &str) -> bool {
    BASE64_SYNTAX.is_match(text)
}

/// Base64 text whose decoded bytes carry an image signature.
pub fn is_base64_image(text: &str) -> bool {
    looks_like_base64_syntax(text) && decode(text).is_ok_and(|bytes| is_image(&bytes))
}
