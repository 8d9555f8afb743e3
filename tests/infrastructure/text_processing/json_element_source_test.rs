use tvilling::application::ports::{ElementSource, ElementSourceError};
use tvilling::domain::{Element, ElementCategory};
use tvilling::infrastructure::text_processing::JsonElementSource;

#[tokio::test]
async fn given_partitioner_array_when_reading_then_returns_elements_in_order() {
    let payload = br#"[
        {"type": "Title", "text": "Report", "metadata": {"page_number": 1}},
        {"type": "CompositeElement", "text": "Body text."},
        {"type": "Table", "text": "a | b", "metadata": {"text_as_html": "<table></table>"}}
    ]"#;

    let elements = JsonElementSource.elements(payload).await.unwrap();

    assert_eq!(
        elements,
        vec![
            Element::new("Title", "Report"),
            Element::new(ElementCategory::Narrative, "Body text."),
            Element::new(ElementCategory::Table, "a | b"),
        ]
    );
}

#[tokio::test]
async fn given_empty_array_when_reading_then_no_elements() {
    let elements = JsonElementSource.elements(b"[]").await.unwrap();
    assert!(elements.is_empty());
}

#[tokio::test]
async fn given_non_json_payload_when_reading_then_invalid_payload() {
    let result = JsonElementSource.elements(b"%PDF-1.7").await;
    assert!(matches!(result, Err(ElementSourceError::InvalidPayload(_))));
}

#[tokio::test]
async fn given_object_instead_of_array_when_reading_then_invalid_payload() {
    let result = JsonElementSource
        .elements(br#"{"type": "Table", "text": "x"}"#)
        .await;
    assert!(matches!(result, Err(ElementSourceError::InvalidPayload(_))));
}

#[tokio::test]
async fn given_element_missing_type_when_reading_then_invalid_payload() {
    let result = JsonElementSource.elements(br#"[{"text": "x"}]"#).await;
    assert!(matches!(result, Err(ElementSourceError::InvalidPayload(_))));
}
