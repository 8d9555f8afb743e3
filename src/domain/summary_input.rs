/// What gets handed to the summarizer. Images travel as base64 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryInput {
    Text(String),
    Table(String),
    Image(String),
}

impl SummaryInput {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Table(_) => "table",
            Self::Image(_) => "image",
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Text(content) | Self::Table(content) | Self::Image(content) => content,
        }
    }
}
