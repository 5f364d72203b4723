#![cfg(feature = "wasm")]

use ocr_accuracy::wasm::*;
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn test_compare_texts() {
    let json = compare_texts(
        Some("the quick fox".to_owned()),
        Some("the quick brown fox".to_owned()),
    );

    assert!(json.contains(r#""originalView":"#));
    assert!(json.contains(r#"{"text":"brown ","role":"Added"}"#));
    assert!(json.contains(r#""stats":{"equal":5,"deleted":0,"inserted":2}"#));
    assert!(!json.contains("reportedAccuracy"));
}

#[wasm_bindgen_test(unsupported = test)]
fn test_missing_texts() {
    assert_eq!(accuracy(None, None), 100.0);
    assert_eq!(accuracy(None, Some("text".to_owned())), 0.0);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_accuracy() {
    assert_eq!(accuracy(Some("hello".to_owned()), Some("hullo".to_owned())), 0.0);
    assert!(
        (accuracy(
            Some("the quick fox".to_owned()),
            Some("the quick brown fox".to_owned())
        ) - 250.0 / 3.0)
            .abs()
            < 1e-9
    );
}

#[wasm_bindgen_test(unsupported = test)]
fn test_compare_service_response() {
    let json = compare_service_response(
        r#"{"original_text": "hello", "ocr_text": "hullo", "accuracy": 80.0}"#,
    )
    .unwrap();

    assert!(json.contains(r#""reportedAccuracy":80.0"#));
    assert!(json.contains(r#""accuracy":0.0"#));
}
