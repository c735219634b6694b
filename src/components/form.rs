use serde::Deserialize;
use serde_json::{json, Value};

use crate::components::parse_props;
use crate::element::Element;
use crate::error::UiResult;
use crate::event::EventKind;
use crate::registry::Component;
use crate::render::RenderScope;
use crate::spec::Props;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    Text,
    Textarea,
    Select,
    Checkbox,
    Number,
    Radio,
    CheckboxGroup,
    Slider,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub options: Option<Value>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub step: Option<f64>,
    #[serde(default)]
    pub min_label: Option<String>,
    #[serde(default)]
    pub max_label: Option<String>,
    #[serde(default)]
    pub show_value: Option<bool>,
    #[serde(default)]
    pub label_always: Option<bool>,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub inline: Option<bool>,
}

/// Declared form actions come in two producer shapes: `{label, action}` or
/// the richer `{id, label, type, target}`. Resolution always goes through
/// the action handler table keyed by the action/target string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FormAction {
    Simple {
        label: String,
        action: String,
        #[serde(default)]
        variant: Option<String>,
    },
    Rich {
        #[serde(default)]
        id: Option<String>,
        label: String,
        #[serde(rename = "type", default)]
        kind: Option<String>,
        target: String,
    },
}

impl FormAction {
    fn label(&self) -> &str {
        match self {
            FormAction::Simple { label, .. } | FormAction::Rich { label, .. } => label,
        }
    }

    fn action_name(&self) -> &str {
        match self {
            FormAction::Simple { action, .. } => action,
            FormAction::Rich { target, .. } => target,
        }
    }

    fn variant(&self) -> &str {
        match self {
            FormAction::Simple { variant, .. } => variant.as_deref().unwrap_or("default"),
            FormAction::Rich { kind, .. } => match kind.as_deref() {
                Some("submit") => "primary",
                Some("cancel") => "secondary",
                _ => "default",
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormProps {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Vec<FormField>,
    #[serde(default)]
    pub actions: Vec<FormAction>,
}

/// Composite: a title, one field-renderer per declared field (dispatching on
/// the field's `type` to the matching primitive component), then one button
/// per declared action. Value collection stays with the host: each rendered
/// field is wired to the value collector registered under its id, invoked on
/// every change with the field's current value.
pub struct Form {
    props: FormProps,
}

pub fn factory(props: &Props) -> UiResult<Box<dyn Component>> {
    Ok(Box::new(Form { props: parse_props("Form", props)? }))
}

impl Component for Form {
    fn render(&self, scope: &RenderScope<'_>) -> UiResult<Element> {
        let mut root = Element::column();
        root.add_class("form");

        if let Some(title) = &self.props.title {
            let mut heading = Element::label(title);
            heading.add_class("form-title");
            root.push_child(heading.into());
        }

        for field in &self.props.fields {
            if let Some(label) = &field.label {
                let text = if field.required == Some(true) {
                    format!("{} *", label)
                } else {
                    label.clone()
                };
                let mut field_label = Element::label(text);
                field_label.add_class("field-label");
                root.push_child(field_label.into());
            }

            let element = scope.render_child(&field_spec(field))?;
            if let Some(collector) = scope.collector(&field.id) {
                element.on(EventKind::Change, move |value| {
                    if let Some(value) = value {
                        collector(value);
                    }
                });
            }
            root.push_child(element);
        }

        if !self.props.actions.is_empty() {
            let mut row = Element::row();
            row.add_class("form-actions");
            for action in &self.props.actions {
                let spec = json!({
                    "component": "Button",
                    "props": {
                        "label": action.label(),
                        "variant": action.variant(),
                        "action": action.action_name(),
                    }
                });
                row.push_child(scope.render_child(&spec)?);
            }
            root.push_child(row.into());
        }

        Ok(root)
    }
}

/// Build the primitive-component spec a field dispatches to.
fn field_spec(field: &FormField) -> Value {
    let mut props = Props::new();
    props.insert("id".to_string(), json!(field.id));

    let component = match field.field_type {
        FieldType::Text | FieldType::Textarea | FieldType::Select | FieldType::Checkbox
        | FieldType::Number => {
            let input_type = match field.field_type {
                FieldType::Text => "text",
                FieldType::Textarea => "textarea",
                FieldType::Select => "select",
                FieldType::Checkbox => "checkbox",
                FieldType::Number => "number",
                _ => unreachable!(),
            };
            props.insert("inputType".to_string(), json!(input_type));
            insert_opt(&mut props, "label", field.label.as_ref().map(|l| json!(l)));
            insert_opt(&mut props, "placeholder", field.placeholder.as_ref().map(|p| json!(p)));
            insert_opt(&mut props, "required", field.required.map(|r| json!(r)));
            insert_opt(&mut props, "options", field.options.clone());
            insert_opt(&mut props, "value", field.value.clone());
            "Input"
        }
        FieldType::Radio => {
            insert_opt(&mut props, "options", field.options.clone());
            insert_opt(&mut props, "value", field.value.clone());
            insert_opt(&mut props, "inline", field.inline.map(|i| json!(i)));
            "Radio"
        }
        FieldType::CheckboxGroup => {
            insert_opt(&mut props, "options", field.options.clone());
            insert_opt(&mut props, "value", field.value.clone());
            insert_opt(&mut props, "layout", field.layout.as_ref().map(|l| json!(l)));
            "CheckboxGroup"
        }
        FieldType::Slider => {
            insert_opt(&mut props, "min", field.min.map(|v| json!(v)));
            insert_opt(&mut props, "max", field.max.map(|v| json!(v)));
            insert_opt(&mut props, "step", field.step.map(|v| json!(v)));
            insert_opt(&mut props, "value", field.value.clone());
            insert_opt(&mut props, "minLabel", field.min_label.as_ref().map(|l| json!(l)));
            insert_opt(&mut props, "maxLabel", field.max_label.as_ref().map(|l| json!(l)));
            insert_opt(&mut props, "showValue", field.show_value.map(|v| json!(v)));
            insert_opt(&mut props, "labelAlways", field.label_always.map(|v| json!(v)));
            "Slider"
        }
    };

    json!({"component": component, "props": Value::Object(props)})
}

fn insert_opt(props: &mut Props, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        props.insert(key.to_string(), value);
    }
}
