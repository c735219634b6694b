//! Named, reusable specification fragments with variable substitution.
//!
//! A template is a specification-shaped value whose string leaves may be
//! placeholder markers of exactly the form `{{identifier}}`. Expansion is a
//! single flat copy-and-substitute pass: no conditionals, no loops, and
//! substituted values are never re-scanned. A template that names another
//! template is resolved by the tree renderer re-entering itself, not here.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{UiError, UiResult};
use crate::spec::{json_kind, Props};

/// A parsed placeholder marker.
///
/// Parsing is a typed step over string leaves rather than a prefix check,
/// so a string is either exactly one marker or plain text — never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub identifier: &'a str,
}

impl<'a> Placeholder<'a> {
    /// Parse a string leaf that is exactly `{{identifier}}`.
    pub fn parse(text: &'a str) -> Option<Placeholder<'a>> {
        static MARKER: OnceLock<Regex> = OnceLock::new();
        let marker = MARKER
            .get_or_init(|| Regex::new(r"^\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}$").unwrap());
        marker
            .captures(text)
            .map(|c| Placeholder { identifier: c.get(1).unwrap().as_str() })
    }
}

/// Name → template-specification table. Templates resolve with strictly
/// higher priority than concrete components of the same name.
#[derive(Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Value>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template. Additive, last-write-wins.
    ///
    /// The stored value must at least be a mapping; the full
    /// `{component, props}` shape is checked after expansion, since
    /// substitution may supply either key.
    pub fn register(&mut self, name: impl Into<String>, template: Value) -> UiResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UiError::InvalidRegistration {
                name,
                reason: "template name must not be blank".to_string(),
            });
        }
        if !template.is_object() {
            return Err(UiError::InvalidRegistration {
                name,
                reason: format!("template must be a mapping, got {}", json_kind(&template)),
            });
        }
        self.templates.insert(name, template);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.templates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }
}

/// Expand a registered template against a props mapping.
///
/// The result must be a mapping carrying `component` and `props` keys, else
/// the producer handed us a template that cannot re-enter the renderer.
pub fn expand(name: &str, template: &Value, props: &Props) -> UiResult<Value> {
    let expanded = substitute(template, props);

    let Some(map) = expanded.as_object() else {
        return Err(UiError::TemplateExpansion {
            template: name.to_string(),
            reason: format!("expansion produced {}", json_kind(&expanded)),
        });
    };
    match map.get("component").and_then(Value::as_str) {
        Some(component) if !component.is_empty() => {}
        _ => {
            return Err(UiError::TemplateExpansion {
                template: name.to_string(),
                reason: "expansion is missing a component name".to_string(),
            })
        }
    }
    match map.get("props") {
        Some(Value::Object(_)) => {}
        Some(other) => {
            return Err(UiError::TemplateExpansion {
                template: name.to_string(),
                reason: format!("expanded props must be a mapping, got {}", json_kind(other)),
            })
        }
        None => {
            return Err(UiError::TemplateExpansion {
                template: name.to_string(),
                reason: "expansion is missing a props mapping".to_string(),
            })
        }
    }

    Ok(expanded)
}

/// Structural copy-and-substitute over a specification value.
///
/// String leaves that parse as placeholders are replaced by the matching
/// prop when present and pass through literally otherwise — a signal of
/// malformed producer input, not an error. Mappings and sequences recurse;
/// every other value kind passes through unchanged.
pub fn substitute(value: &Value, props: &Props) -> Value {
    match value {
        Value::String(text) => match Placeholder::parse(text) {
            Some(placeholder) => match props.get(placeholder.identifier) {
                Some(replacement) => replacement.clone(),
                None => {
                    log::warn!(
                        "template placeholder '{{{{{}}}}}' has no matching prop; passing through literally",
                        placeholder.identifier
                    );
                    value.clone()
                }
            },
            None => value.clone(),
        },
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), substitute(v, props)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(|v| substitute(v, props)).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn props(value: Value) -> Props {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_placeholder_parse() {
        assert_eq!(
            Placeholder::parse("{{title}}"),
            Some(Placeholder { identifier: "title" })
        );
        assert_eq!(Placeholder::parse("{{ title }}"), None);
        assert_eq!(Placeholder::parse("prefix {{title}}"), None);
        assert_eq!(Placeholder::parse("{{1bad}}"), None);
        assert_eq!(Placeholder::parse("plain"), None);
    }

    #[test]
    fn test_substitute_replaces_marker_leaves() {
        let template = json!({
            "component": "Text",
            "props": {"text": "{{message}}", "variant": "h1"}
        });
        let result = substitute(&template, &props(json!({"message": "Hello"})));
        assert_eq!(
            result,
            json!({"component": "Text", "props": {"text": "Hello", "variant": "h1"}})
        );
    }

    #[test]
    fn test_substitute_keeps_non_string_values() {
        let template = json!({"props": {"count": 3, "flag": true, "items": ["{{a}}", 1]}});
        let result = substitute(&template, &props(json!({"a": "A"})));
        assert_eq!(result, json!({"props": {"count": 3, "flag": true, "items": ["A", 1]}}));
    }

    #[test]
    fn test_unresolved_placeholder_passes_through() {
        let template = json!({"props": {"text": "{{missing}}"}});
        let result = substitute(&template, &Props::new());
        assert_eq!(result, json!({"props": {"text": "{{missing}}"}}));
    }

    #[test]
    fn test_substitution_is_flat() {
        // A substituted value containing marker text is not re-scanned.
        let template = json!({"props": {"text": "{{outer}}"}});
        let result = substitute(&template, &props(json!({"outer": "{{inner}}", "inner": "no"})));
        assert_eq!(result, json!({"props": {"text": "{{inner}}"}}));
    }

    #[test]
    fn test_substitute_idempotent_without_markers() {
        let template = json!({
            "component": "Card",
            "props": {"title": "Fixed", "children": [{"component": "Text", "props": {"text": "x"}}]}
        });
        let p = props(json!({"unused": 1}));
        let once = substitute(&template, &p);
        let twice = substitute(&once, &p);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_expand_requires_component_and_props() {
        let template = json!({"component": "Text"});
        let err = expand("greeting", &template, &Props::new()).unwrap_err();
        assert!(matches!(err, UiError::TemplateExpansion { template, .. } if template == "greeting"));

        let template = json!({"component": "", "props": {}});
        assert!(expand("greeting", &template, &Props::new()).is_err());

        let template = json!({"component": "Text", "props": []});
        assert!(expand("greeting", &template, &Props::new()).is_err());
    }

    #[test]
    fn test_expand_component_via_placeholder() {
        let template = json!({"component": "{{kind}}", "props": {}});
        let result = expand("indirect", &template, &props(json!({"kind": "Text"}))).unwrap();
        assert_eq!(result["component"], json!("Text"));
    }

    #[test]
    fn test_registry_rejects_blank_name_and_scalar_template() {
        let mut registry = TemplateRegistry::new();
        assert!(matches!(
            registry.register("  ", json!({"component": "Text", "props": {}})),
            Err(UiError::InvalidRegistration { .. })
        ));
        assert!(matches!(
            registry.register("t", json!("scalar")),
            Err(UiError::InvalidRegistration { .. })
        ));
    }
}
