//! Parsing for the `translate_a/single` payload.
//!
//! The endpoint answers with nested arrays rather than an object: the
//! translated segments sit at `[0][*][0]` and must be concatenated, and
//! the detected source language code sits at `[2]`.

use serde_json::Value;

use super::Translation;

pub fn parse_payload(payload: &Value) -> Result<Translation, String> {
    let segments = payload
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| "missing segment array in provider response".to_string())?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(text);
        }
    }

    if translated.is_empty() {
        return Err("provider returned an empty translation".to_string());
    }

    let source_lang = payload
        .get(2)
        .and_then(Value::as_str)
        .unwrap_or("auto")
        .to_string();

    Ok(Translation {
        translated,
        source_lang,
    })
}
