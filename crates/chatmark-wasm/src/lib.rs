use chatmark_parser::{AnnotateOptions, Document};
use wasm_bindgen::prelude::*;

fn to_json(doc: &Document) -> Result<String, JsError> {
    serde_json::to_string(doc).map_err(|e| JsError::new(&e.to_string()))
}

fn options(default_scheme: Option<String>) -> AnnotateOptions {
    match default_scheme {
        Some(scheme) => AnnotateOptions {
            default_scheme: scheme,
        },
        None => AnnotateOptions::default(),
    }
}

/// Annotate a message and return the span document as JSON.
#[wasm_bindgen]
pub fn annotate_json(input: &str, default_scheme: Option<String>) -> Result<String, JsError> {
    let doc = chatmark_parser::annotate_with(input, &options(default_scheme));
    to_json(&doc)
}

/// Same as `annotate_json`, for raw bytes (e.g. a `Uint8Array`). Fails when
/// the bytes are not UTF-8.
#[wasm_bindgen]
pub fn annotate_bytes_json(
    input: &[u8],
    default_scheme: Option<String>,
) -> Result<String, JsError> {
    let doc = chatmark_parser::annotate_bytes_with(input, &options(default_scheme))
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_json(&doc)
}

// Optional: human-readable span tree for debugging
#[wasm_bindgen]
pub fn annotate_debug(input: &str) -> String {
    chatmark_parser::annotate(input).to_string()
}
