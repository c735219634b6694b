use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::element::Element;
use crate::error::{UiError, UiResult};
use crate::spec::Props;

/// The structured style subset every component honors.
///
/// Absent fields have no visual effect; present fields apply additively.
/// Classes merge as a set union onto the element's class list; the six
/// dimensional/color properties apply as direct style properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleRecord {
    pub classes: BTreeSet<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub padding: Option<String>,
    pub margin: Option<String>,
    pub background: Option<String>,
    pub color: Option<String>,
    pub border: Option<String>,
}

impl StyleRecord {
    /// Parse the optional `style` entry out of a props mapping.
    pub fn from_props(component: &str, props: &Props) -> UiResult<Option<StyleRecord>> {
        let Some(raw) = props.get("style") else {
            return Ok(None);
        };
        if raw.is_null() {
            return Ok(None);
        }
        let record: StyleRecord =
            serde_json::from_value(raw.clone()).map_err(|e| UiError::InvalidProps {
                component: component.to_string(),
                reason: format!("invalid style record: {}", e),
            })?;
        Ok(Some(record))
    }

    pub fn is_empty(&self) -> bool {
        *self == StyleRecord::default()
    }

    /// Apply this record onto an element. Classes union in; style properties
    /// overwrite, so callers control precedence by application order.
    pub fn apply(&self, element: &mut Element) {
        for class in &self.classes {
            element.add_class(class);
        }
        for (name, value) in [
            ("width", &self.width),
            ("height", &self.height),
            ("padding", &self.padding),
            ("margin", &self.margin),
            ("background", &self.background),
            ("color", &self.color),
            ("border", &self.border),
        ] {
            if let Some(value) = value {
                element.set_style(name, value);
            }
        }
    }
}

/// Convenience for building a record from a plain JSON value, used by themes.
impl TryFrom<&Value> for StyleRecord {
    type Error = UiError;

    fn try_from(value: &Value) -> UiResult<StyleRecord> {
        serde_json::from_value(value.clone()).map_err(|e| UiError::MalformedJson {
            reason: format!("invalid style record: {}", e),
        })
    }
}
