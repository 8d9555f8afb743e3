use crate::domain::{Element, ElementCategory};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedElements {
    pub texts: Vec<String>,
    pub tables: Vec<String>,
}

impl CategorizedElements {
    pub fn len(&self) -> usize {
        self.texts.len() + self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.tables.is_empty()
    }
}

/// Splits elements into narrative texts and tables, keeping input order within each.
/// Any other category (titles, headers, footers) is dropped on purpose.
pub fn categorize<I>(elements: I) -> CategorizedElements
where
    I: IntoIterator<Item = Element>,
{
    let mut categorized = CategorizedElements::default();

    for element in elements {
        match element.category {
            ElementCategory::Table => categorized.tables.push(element.text),
            ElementCategory::Narrative => categorized.texts.push(element.text),
            ElementCategory::Other(tag) => {
                tracing::trace!(category = %tag, "element_skipped");
            }
        }
    }

    categorized
}
