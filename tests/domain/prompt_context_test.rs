use tvilling::domain::{PromptContext, encode, image_data_url};

const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

#[test]
fn given_png_base64_when_building_data_url_then_uses_png_mime() {
    let mut png = PNG_HEADER.to_vec();
    png.extend_from_slice(&[0u8; 32]);
    let b64 = encode(&png);

    assert_eq!(image_data_url(&b64), format!("data:image/png;base64,{}", b64));
}

#[test]
fn given_unrecognised_payload_when_building_data_url_then_falls_back_to_jpeg() {
    let b64 = encode(b"no signature here");
    assert!(image_data_url(&b64).starts_with("data:image/jpeg;base64,"));
}

#[test]
fn given_short_payload_when_building_data_url_then_does_not_panic() {
    assert_eq!(image_data_url("QQ"), "data:image/jpeg;base64,QQ");
}

#[test]
fn given_texts_only_context_when_counting_then_not_empty() {
    let context = PromptContext {
        images: vec![],
        texts_or_tables: vec!["first".to_string(), "second".to_string()],
    };
    assert_eq!(context.len(), 2);
    assert!(!context.is_empty());
}

#[test]
fn given_default_context_when_checking_then_is_empty() {
    let context = PromptContext::default();
    assert!(context.is_empty());
    assert!(context.image_data_urls().is_empty());
}

#[test]
fn given_images_when_listing_data_urls_then_one_per_image_in_order() {
    let gif = encode(b"GIF89a\x01\x00\x01\x00");
    let png = encode(&PNG_HEADER);
    let context = PromptContext {
        images: vec![gif, png],
        texts_or_tables: vec![],
    };

    let urls = context.image_data_urls();
    assert_eq!(urls.len(), 2);
    assert!(urls[0].starts_with("data:image/gif;base64,"));
    assert!(urls[1].starts_with("data:image/png;base64,"));
}
