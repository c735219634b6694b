use serde::Deserialize;
use serde_json::Value;

use crate::components::{parse_props, FieldOptions};
use crate::element::Element;
use crate::error::{UiError, UiResult};
use crate::registry::Component;
use crate::render::RenderScope;
use crate::spec::Props;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Textarea,
    Select,
    Checkbox,
    Number,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputProps {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub input_type: Option<InputType>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
    /// Advisory metadata passed to the toolkit, not enforced here.
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub options: Option<FieldOptions>,
}

/// Single input field; `inputType` selects among text, multiline,
/// single-select, checkbox, and numeric primitives.
pub struct Input {
    props: InputProps,
}

pub fn factory(props: &Props) -> UiResult<Box<dyn Component>> {
    Ok(Box::new(Input { props: parse_props("Input", props)? }))
}

impl Input {
    fn input_type(&self) -> InputType {
        self.props.input_type.unwrap_or(InputType::Text)
    }

    fn string_value(&self) -> Option<String> {
        self.props.value.as_ref().and_then(Value::as_str).map(str::to_string)
    }
}

impl Component for Input {
    fn validate_props(&self) -> UiResult<()> {
        if self.input_type() == InputType::Select && self.props.options.is_none() {
            return Err(UiError::InvalidProps {
                component: "Input".to_string(),
                reason: "select inputs require 'options'".to_string(),
            });
        }
        Ok(())
    }

    fn render(&self, _scope: &RenderScope<'_>) -> UiResult<Element> {
        let mut element = match self.input_type() {
            InputType::Text => Element::text_input(self.string_value()),
            InputType::Textarea => Element::text_area(self.string_value()),
            InputType::Select => {
                let options = self.props.options.as_ref().map(FieldOptions::pairs).unwrap_or_default();
                Element::select(options, self.string_value())
            }
            InputType::Checkbox => {
                let checked = self.props.value.as_ref().and_then(Value::as_bool).unwrap_or(false);
                Element::checkbox(self.props.label.clone(), checked)
            }
            InputType::Number => {
                Element::number_input(self.props.value.as_ref().and_then(Value::as_f64))
            }
        };

        if let Some(id) = &self.props.id {
            element.set_attr("id", id);
        }
        if let Some(placeholder) = &self.props.placeholder {
            element.set_attr("placeholder", placeholder);
        }
        if self.props.required == Some(true) {
            element.set_attr("required", "true");
        }
        Ok(element)
    }
}
