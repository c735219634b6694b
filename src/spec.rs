use serde_json::Value;

use crate::error::{UiError, UiResult};

/// The fixed sentinel every top-level envelope must carry in its `type` field.
pub const ENVELOPE_KIND: &str = "ui.render";

/// The untyped props mapping attached to a specification.
///
/// Kept as an ordered JSON map — producers control key order, and ordered
/// `{value: label}` option mappings depend on it.
pub type Props = serde_json::Map<String, Value>;

/// Validate the top-level envelope shape.
///
/// Only top-level envelopes carry the `type` sentinel; nested child specs
/// omit it and are never checked for it.
pub fn check_envelope(value: &Value) -> UiResult<()> {
    let kind = value.get("type").and_then(Value::as_str);
    if kind != Some(ENVELOPE_KIND) {
        return Err(UiError::InvalidEnvelope {
            found: kind.unwrap_or("<missing>").to_string(),
        });
    }
    match value.get("component").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => Ok(()),
        _ => Err(UiError::MissingComponent),
    }
}

/// Split a specification value into its component name and props mapping.
///
/// `props` defaults to an empty mapping when absent. A present but
/// non-mapping `props` is rejected — specs are untrusted producer input.
pub fn split_spec(value: &Value) -> UiResult<(&str, Props)> {
    let name = match value.get("component").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name,
        _ => return Err(UiError::MissingComponent),
    };

    let props = match value.get("props") {
        None | Some(Value::Null) => Props::new(),
        Some(Value::Object(map)) => map.clone(),
        Some(other) => {
            return Err(UiError::InvalidProps {
                component: name.to_string(),
                reason: format!("props must be a mapping, got {}", json_kind(other)),
            })
        }
    };

    Ok((name, props))
}

/// Human-readable name of a JSON value's kind, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
