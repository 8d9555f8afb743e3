use crate::domain::SummaryRecord;

#[derive(Debug, Clone)]
pub struct SearchHit {
    pub record: SummaryRecord,
    pub score: f32,
}
