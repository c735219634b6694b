use serde::Deserialize;
use serde_json::Value;

use crate::components::parse_props;
use crate::element::Element;
use crate::error::UiResult;
use crate::registry::Component;
use crate::render::RenderScope;
use crate::spec::Props;
use crate::template;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProps {
    #[serde(default)]
    pub data: Vec<Value>,
    /// Per-item spec with `{{placeholder}}` slots. Object items substitute
    /// by their own keys; scalar items substitute as `{{item}}`.
    #[serde(default)]
    pub item_template: Option<Value>,
    #[serde(default)]
    pub empty_message: Option<String>,
}

/// Structural composite: one child per data item, in data order.
pub struct List {
    props: ListProps,
}

pub fn factory(props: &Props) -> UiResult<Box<dyn Component>> {
    Ok(Box::new(List { props: parse_props("List", props)? }))
}

impl Component for List {
    fn render(&self, scope: &RenderScope<'_>) -> UiResult<Element> {
        let mut root = Element::column();
        root.add_class("list");

        if self.props.data.is_empty() {
            let message = self.props.empty_message.as_deref().unwrap_or("No items");
            let mut empty = Element::label(message);
            empty.add_class("list-empty");
            root.push_child(empty.into());
            return Ok(root);
        }

        for item in &self.props.data {
            match &self.props.item_template {
                Some(item_spec) => {
                    let slots = item_props(item);
                    let merged = template::substitute(item_spec, &slots);
                    root.push_child(scope.render_child(&merged)?);
                }
                None => {
                    let mut row = Element::label(stringify(item));
                    row.add_class("list-item");
                    root.push_child(row.into());
                }
            }
        }
        Ok(root)
    }
}

/// Substitution slots for one data item. Objects expose their own keys;
/// anything else is reachable as `{{item}}`.
fn item_props(item: &Value) -> Props {
    match item {
        Value::Object(map) => map.clone(),
        other => {
            let mut props = Props::new();
            props.insert("item".to_string(), other.clone());
            props
        }
    }
}

fn stringify(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderer;
    use serde_json::json;

    #[test]
    fn test_item_template_merges_object_fields() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({
            "type": "ui.render",
            "component": "List",
            "props": {
                "data": [
                    {"name": "Ada", "role": "admin"},
                    {"name": "Grace", "role": "member"}
                ],
                "itemTemplate": {
                    "component": "Text",
                    "props": {"text": "{{name}}"}
                }
            }
        });
        let element = renderer.render_ui(&envelope).unwrap();
        assert_eq!(element.children().len(), 2);
        assert_eq!(element.child(0).unwrap().text(), Some("Ada"));
        assert_eq!(element.child(1).unwrap().text(), Some("Grace"));
    }

    #[test]
    fn test_scalar_items_substitute_as_item() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({
            "type": "ui.render",
            "component": "List",
            "props": {
                "data": ["alpha", "beta"],
                "itemTemplate": {"component": "Text", "props": {"text": "{{item}}"}}
            }
        });
        let element = renderer.render_ui(&envelope).unwrap();
        assert_eq!(element.child(0).unwrap().text(), Some("alpha"));
        assert_eq!(element.child(1).unwrap().text(), Some("beta"));
    }

    #[test]
    fn test_untemplated_items_render_as_labels() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({
            "type": "ui.render",
            "component": "List",
            "props": {"data": ["one", 2]}
        });
        let element = renderer.render_ui(&envelope).unwrap();
        assert_eq!(element.child(0).unwrap().text(), Some("one"));
        assert_eq!(element.child(1).unwrap().text(), Some("2"));
        assert!(element.child(0).unwrap().has_class("list-item"));
    }

    #[test]
    fn test_empty_data_shows_message() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({
            "type": "ui.render",
            "component": "List",
            "props": {"data": [], "emptyMessage": "Nothing yet"}
        });
        let element = renderer.render_ui(&envelope).unwrap();
        assert_eq!(element.children().len(), 1);
        let empty = element.child(0).unwrap();
        assert!(empty.has_class("list-empty"));
        assert_eq!(empty.text(), Some("Nothing yet"));
    }
}
