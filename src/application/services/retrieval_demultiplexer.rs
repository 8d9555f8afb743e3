use crate::domain::{PromptContext, encode, is_base64_image, is_image};

enum Payload {
    Image(String),
    Text(String),
}

/// Routes every retrieved payload into exactly one side of the prompt context,
/// preserving input order. Never fails: anything not recognised as an image is text.
pub fn split<B: AsRef<[u8]>>(retrieved: &[B]) -> PromptContext {
    let mut context = PromptContext::default();

    for payload in retrieved {
        match classify(payload.as_ref()) {
            Payload::Image(b64) => context.images.push(b64),
            Payload::Text(text) => context.texts_or_tables.push(text),
        }
    }

    context
}

fn classify(raw: &[u8]) -> Payload {
    match std::str::from_utf8(raw) {
        Ok(text) if is_base64_image(text) => Payload::Image(text.to_string()),
        Ok(text) => Payload::Text(text.to_string()),
        // binary image stored as-is rather than as base64 text
        Err(_) if is_image(raw) => Payload::Image(encode(raw)),
        Err(_) => Payload::Text(String::from_utf8_lossy(raw).into_owned()),
    }
}
