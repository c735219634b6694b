//! Locating UI specifications inside free-form producer text.
//!
//! Conversational producers interleave prose with a fenced ```json block
//! carrying the `ui.render` envelope. The extractor finds that block,
//! parses it, and returns the surrounding prose with the block removed so a
//! host can display the prose and render the spec separately.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{UiError, UiResult};
use crate::spec::ENVELOPE_KIND;

/// A spec found in producer text, with the prose that remains around it.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The input with the fenced block removed and whitespace trimmed.
    pub text: String,
    /// The parsed envelope.
    pub spec: Value,
}

fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        // A json-fenced object mentioning the envelope kind. `[^`]` keeps the
        // match inside one fence.
        Regex::new(r#"(?s)```json\s*(\{[^`]*"type"\s*:\s*"ui\.render"[^`]*\})\s*```"#)
            .expect("fence pattern is valid")
    })
}

/// Find the first `ui.render` spec embedded in `text`.
///
/// Returns `Ok(None)` when no candidate block is present, or when a parsed
/// block is not actually an envelope (no `component` key). A candidate block
/// that is not valid JSON fails with [`UiError::MalformedJson`].
pub fn extract_ui_spec(text: &str) -> UiResult<Option<Extraction>> {
    let Some(captures) = fence_regex().captures(text) else {
        return Ok(None);
    };
    let raw = captures.get(1).expect("pattern has one group");

    let spec: Value = serde_json::from_str(raw.as_str())
        .map_err(|e| UiError::MalformedJson { reason: e.to_string() })?;

    let is_envelope = spec.get("type").and_then(Value::as_str) == Some(ENVELOPE_KIND)
        && spec.get("component").is_some();
    if !is_envelope {
        return Ok(None);
    }

    let whole = captures.get(0).expect("whole match");
    let mut cleaned = String::with_capacity(text.len() - whole.len());
    cleaned.push_str(&text[..whole.start()]);
    cleaned.push_str(&text[whole.end()..]);

    Ok(Some(Extraction { text: cleaned.trim().to_string(), spec }))
}
