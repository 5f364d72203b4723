//! Expose the comparison engine to WebAssembly.
use wasm_bindgen::prelude::*;

use crate::{ComparisonConfig, ServiceResponse};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// Compare two texts and return the views, score and counts as a JSON string
/// (see `Comparison`). `null`/`undefined` texts are treated as empty.
///
/// # Panics
///
/// If serialization to JSON fails which should not happen
#[wasm_bindgen(js_name = compareTexts)]
#[must_use]
pub fn compare_texts(original: Option<String>, ocr: Option<String>) -> String {
    set_panic_hook();

    let comparison = crate::compare_optional(
        original.as_deref(),
        ocr.as_deref(),
        &ComparisonConfig::default(),
    );

    serde_json::to_string(&comparison).expect("Failed to serialize comparison")
}

/// Recompute the comparison for a payload returned by the ingestion service.
///
/// # Errors
///
/// If the payload is malformed or one of its texts is not a string.
#[wasm_bindgen(js_name = compareServiceResponse)]
pub fn compare_service_response(payload: &str) -> Result<String, JsError> {
    set_panic_hook();

    let comparison = ServiceResponse::from_json(payload)?.compare(&ComparisonConfig::default());

    Ok(serde_json::to_string(&comparison)?)
}

/// Token overlap accuracy of `ocr` against `original` in `[0, 100]`.
#[wasm_bindgen]
#[must_use]
pub fn accuracy(original: Option<String>, ocr: Option<String>) -> f64 {
    set_panic_hook();

    crate::compare_optional(
        original.as_deref(),
        ocr.as_deref(),
        &ComparisonConfig::default(),
    )
    .accuracy()
    .value()
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
