use tvilling::domain::{ContentId, ContentRecord, SummaryRecord};

#[test]
fn given_two_content_ids_when_generated_then_are_unique() {
    assert_ne!(ContentId::new(), ContentId::new());
}

#[test]
fn given_content_id_when_displayed_then_parses_back() {
    let id = ContentId::new();
    let text = id.to_string();

    assert_eq!(text.len(), 36);
    assert_eq!(text.parse::<ContentId>().unwrap(), id);
}

#[test]
fn given_garbage_when_parsing_content_id_then_fails() {
    assert!("not-a-uuid".parse::<ContentId>().is_err());
}

#[test]
fn given_content_id_when_serialized_then_is_plain_uuid_string() {
    let id = ContentId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{}\"", id));
}

#[test]
fn given_summary_when_creating_record_then_metadata_links_id_under_key() {
    let id = ContentId::new();
    let record = SummaryRecord::new(id, "a summary".to_string(), "doc_id");

    assert_eq!(record.text, "a summary");
    assert_eq!(record.metadata.len(), 1);
    assert_eq!(record.metadata["doc_id"], id.to_string());
    assert_eq!(record.linked_id("doc_id"), Some(id));
}

#[test]
fn given_other_key_when_reading_linked_id_then_none() {
    let record = SummaryRecord::new(ContentId::new(), "s".to_string(), "doc_id");
    assert_eq!(record.linked_id("source_id"), None);
}

#[test]
fn given_text_when_creating_content_record_then_stores_utf8_bytes() {
    let id = ContentId::new();
    let record = ContentRecord::from_text(id, "raw content – ünïcode");

    assert_eq!(record.id, id);
    assert_eq!(record.bytes, "raw content – ünïcode".as_bytes());
}
