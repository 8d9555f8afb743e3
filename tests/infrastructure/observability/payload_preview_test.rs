use tvilling::domain::encode;
use tvilling::infrastructure::observability::preview_payload;

#[test]
fn given_blank_payload_when_previewing_then_marks_empty() {
    assert_eq!(preview_payload(""), "[EMPTY]");
    assert_eq!(preview_payload("   \n"), "[EMPTY]");
}

#[test]
fn given_short_text_when_previewing_then_returned_trimmed() {
    assert_eq!(preview_payload("  hello world  "), "hello world");
}

#[test]
fn given_long_text_when_previewing_then_truncated_with_total() {
    let long = "a".repeat(150);

    let preview = preview_payload(&long);

    assert_eq!(preview, format!("{}... (150 chars total)", "a".repeat(100)));
}

#[test]
fn given_long_multibyte_text_when_previewing_then_cuts_on_char_boundary() {
    let long = "ø".repeat(120);

    let preview = preview_payload(&long);

    assert!(preview.starts_with(&"ø".repeat(100)));
    assert!(preview.ends_with("(120 chars total)"));
}

#[test]
fn given_base64_image_when_previewing_then_replaced_by_marker() {
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0];
    jpeg.extend(std::iter::repeat_n(0x42, 300));
    let b64 = encode(&jpeg);

    assert_eq!(
        preview_payload(&b64),
        format!("[base64 image, {} chars]", b64.len())
    );
}

#[test]
fn given_base64_of_text_when_previewing_then_shown_as_text() {
    let b64 = encode(b"short");
    assert_eq!(preview_payload(&b64), b64);
}
