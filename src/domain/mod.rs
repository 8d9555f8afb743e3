mod content_id;
mod element;
mod embedding;
mod encoding;
mod prompt_context;
mod records;
mod signature;
mod summary_input;

pub use content_id::ContentId;
pub use element::{Element, ElementCategory, NARRATIVE_TAG, TABLE_TAG};
pub use embedding::Embedding;
pub use encoding::{EncodingError, decode, encode, encode_image};
pub use prompt_context::{PromptContext, image_data_url};
pub use records::{ContentRecord, SummaryRecord};
pub use signature::{ImageFormat, is_base64_image, is_image, looks_like_base64_syntax};
pub use summary_input::SummaryInput;
