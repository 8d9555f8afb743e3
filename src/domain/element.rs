use serde::Deserialize;

pub const TABLE_TAG: &str = "Table";
pub const NARRATIVE_TAG: &str = "CompositeElement";

/// Category of an extracted element, decided once when the partitioner output is read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ElementCategory {
    Table,
    Narrative,
    Other(String),
}

impl ElementCategory {
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Table => TABLE_TAG,
            Self::Narrative => NARRATIVE_TAG,
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for ElementCategory {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            TABLE_TAG => Self::Table,
            NARRATIVE_TAG => Self::Narrative,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for ElementCategory {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

/// One unit of partitioner output. Unknown fields (metadata, element ids) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Element {
    #[serde(rename = "type", alias = "category")]
    pub category: ElementCategory,
    #[serde(default)]
    pub text: String,
}

impl Element {
    pub fn new(category: impl Into<ElementCategory>, text: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            text: text.into(),
        }
    }
}
