//! Shorthand normalization for flow config JSON.
//!
//! JS callers pass `locales` either as one tag or a list, the way
//! `Intl.NumberFormat` accepts them. The canonical form is always a list.

use serde_json::Value as JsonValue;

/// Normalize shorthand fields in place of a config object. Non-objects are
/// returned unchanged so deserialization reports the real error.
pub fn normalize_config_json(mut value: JsonValue) -> JsonValue {
    if let JsonValue::Object(map) = &mut value {
        if let Some(locales) = map.remove("locales") {
            let normalized = match locales {
                JsonValue::String(tag) => JsonValue::Array(vec![JsonValue::String(tag)]),
                JsonValue::Null => JsonValue::Array(Vec::new()),
                other => other,
            };
            map.insert("locales".to_string(), normalized);
        }
        // `format` is accepted under its JS option-bag name as well.
        if !map.contains_key("format") {
            if let Some(options) = map.remove("formatOptions") {
                map.insert("format".to_string(), options);
            }
        }
    }
    value
}
