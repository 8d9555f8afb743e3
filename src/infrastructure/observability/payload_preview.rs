use crate::domain::is_base64_image;

const MAX_VISIBLE_CHARS: usize = 100;

/// Shortens a stored or retrieved payload for log output. Base64 images are
/// replaced by a marker instead of dumping the blob.
pub fn preview_payload(payload: &str) -> String {
    let trimmed = payload.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    if is_base64_image(trimmed) {
        return format!("[base64 image, {} chars]", trimmed.len());
    }

    let total_chars = trimmed.chars().count();
    if total_chars <= MAX_VISIBLE_CHARS {
        return trimmed.to_string();
    }

    let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
    format!("{visible}... ({total_chars} chars total)")
}
