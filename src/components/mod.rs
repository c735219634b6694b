//! Built-in component kinds.
//!
//! One unit per kind; each parses a typed view of its props mapping and
//! produces a toolkit element, rendering declared children back through the
//! tree renderer.

pub mod button;
pub mod card;
pub mod checkbox_group;
pub mod container;
pub mod form;
pub mod input;
pub mod list;
pub mod radio;
pub mod slider;
pub mod text;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{UiError, UiResult};
use crate::registry::ComponentRegistry;
use crate::spec::Props;

/// Register the ten built-in component kinds.
pub fn register_builtins(registry: &mut ComponentRegistry) -> UiResult<()> {
    registry.register("Container", container::factory)?;
    registry.register("Text", text::factory)?;
    registry.register("Input", input::factory)?;
    registry.register("Button", button::factory)?;
    registry.register("Radio", radio::factory)?;
    registry.register("CheckboxGroup", checkbox_group::factory)?;
    registry.register("Slider", slider::factory)?;
    registry.register("Form", form::factory)?;
    registry.register("Card", card::factory)?;
    registry.register("List", list::factory)?;
    Ok(())
}

/// Deserialize a typed props view, naming the component on failure.
/// Unknown keys (style, events, anything producer-specific) are tolerated.
pub(crate) fn parse_props<T: DeserializeOwned>(component: &str, props: &Props) -> UiResult<T> {
    serde_json::from_value(Value::Object(props.clone())).map_err(|e| UiError::InvalidProps {
        component: component.to_string(),
        reason: e.to_string(),
    })
}

/// Option declarations accepted by selection components: either an ordered
/// `{value: label}` mapping or a plain list where each entry is both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldOptions {
    Labeled(serde_json::Map<String, Value>),
    Plain(Vec<String>),
}

impl FieldOptions {
    /// `(value, label)` pairs in declaration order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        match self {
            FieldOptions::Labeled(map) => map
                .iter()
                .map(|(value, label)| {
                    let label = match label {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (value.clone(), label)
                })
                .collect(),
            FieldOptions::Plain(values) => {
                values.iter().map(|v| (v.clone(), v.clone())).collect()
            }
        }
    }
}
