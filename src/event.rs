use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{UiError, UiResult};
use crate::spec::{json_kind, Props};

/// The event kinds a specification may bind actions to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Click,
    Change,
    Submit,
    Keydown,
    Focus,
    Blur,
    Slide,
}

impl EventKind {
    pub fn from_key(key: &str) -> Option<EventKind> {
        match key {
            "click" => Some(EventKind::Click),
            "change" => Some(EventKind::Change),
            "submit" => Some(EventKind::Submit),
            "keydown" => Some(EventKind::Keydown),
            "focus" => Some(EventKind::Focus),
            "blur" => Some(EventKind::Blur),
            "slide" => Some(EventKind::Slide),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Change => "change",
            EventKind::Submit => "submit",
            EventKind::Keydown => "keydown",
            EventKind::Focus => "focus",
            EventKind::Blur => "blur",
            EventKind::Slide => "slide",
        }
    }

    /// Whether handlers bound to this kind receive the element's current value.
    pub fn carries_value(&self) -> bool {
        matches!(self, EventKind::Change | EventKind::Slide)
    }
}

/// A declarative event-to-action binding derived from `props.events`.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBinding {
    pub kind: EventKind,
    pub action: String,
    pub params: Props,
}

impl EventBinding {
    /// Parse every binding declared in a props mapping.
    ///
    /// `props.events` maps event-kind keys to either a bare action name or
    /// `{action, params}`. Unknown event-kind keys are dropped (non-fatal);
    /// malformed values fail, since specs are untrusted input.
    pub fn parse_all(component: &str, props: &Props) -> UiResult<Vec<EventBinding>> {
        let Some(raw) = props.get("events") else {
            return Ok(Vec::new());
        };

        let entries = match raw {
            Value::Null => return Ok(Vec::new()),
            Value::Object(map) => map,
            other => {
                return Err(UiError::InvalidProps {
                    component: component.to_string(),
                    reason: format!("events must be a mapping, got {}", json_kind(other)),
                })
            }
        };

        let mut bindings = Vec::new();
        for (key, value) in entries {
            let Some(kind) = EventKind::from_key(key) else {
                log::warn!("dropping unknown event kind '{}' on component '{}'", key, component);
                continue;
            };
            bindings.push(Self::parse_one(component, kind, value)?);
        }
        Ok(bindings)
    }

    fn parse_one(component: &str, kind: EventKind, value: &Value) -> UiResult<EventBinding> {
        match value {
            Value::String(action) => Ok(EventBinding {
                kind,
                action: action.clone(),
                params: Props::new(),
            }),
            Value::Object(map) => {
                let action = map
                    .get("action")
                    .and_then(Value::as_str)
                    .ok_or_else(|| UiError::InvalidProps {
                        component: component.to_string(),
                        reason: format!("event '{}' binding is missing an action name", kind.as_str()),
                    })?
                    .to_string();
                let params = match map.get("params") {
                    None | Some(Value::Null) => Props::new(),
                    Some(Value::Object(p)) => p.clone(),
                    Some(other) => {
                        return Err(UiError::InvalidProps {
                            component: component.to_string(),
                            reason: format!(
                                "event '{}' params must be a mapping, got {}",
                                kind.as_str(),
                                json_kind(other)
                            ),
                        })
                    }
                };
                Ok(EventBinding { kind, action, params })
            }
            other => Err(UiError::InvalidProps {
                component: component.to_string(),
                reason: format!(
                    "event '{}' binding must be an action name or mapping, got {}",
                    kind.as_str(),
                    json_kind(other)
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props_with_events(events: Value) -> Props {
        let mut props = Props::new();
        props.insert("events".to_string(), events);
        props
    }

    #[test]
    fn test_parse_bare_action_name() {
        let props = props_with_events(json!({"click": "openSettings"}));
        let bindings = EventBinding::parse_all("Button", &props).unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].kind, EventKind::Click);
        assert_eq!(bindings[0].action, "openSettings");
        assert!(bindings[0].params.is_empty());
    }

    #[test]
    fn test_parse_action_with_params() {
        let props = props_with_events(json!({
            "change": {"action": "search", "params": {"scope": "chats"}}
        }));
        let bindings = EventBinding::parse_all("Input", &props).unwrap();
        assert_eq!(bindings[0].action, "search");
        assert_eq!(bindings[0].params.get("scope"), Some(&json!("chats")));
    }

    #[test]
    fn test_unknown_event_kind_dropped() {
        let props = props_with_events(json!({"hover": "ignored", "click": "kept"}));
        let bindings = EventBinding::parse_all("Button", &props).unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].action, "kept");
    }

    #[test]
    fn test_malformed_binding_value_fails() {
        let props = props_with_events(json!({"click": 42}));
        assert!(matches!(
            EventBinding::parse_all("Button", &props),
            Err(UiError::InvalidProps { .. })
        ));
    }

    #[test]
    fn test_no_events_key() {
        assert!(EventBinding::parse_all("Text", &Props::new())
            .unwrap()
            .is_empty());
    }
}
