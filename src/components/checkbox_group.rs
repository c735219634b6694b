use serde::Deserialize;

use crate::components::{parse_props, FieldOptions};
use crate::element::Element;
use crate::error::UiResult;
use crate::registry::Component;
use crate::render::RenderScope;
use crate::spec::Props;

#[derive(Debug, Clone, Deserialize)]
pub struct CheckboxGroupProps {
    #[serde(default)]
    pub id: Option<String>,
    pub options: FieldOptions,
    /// Initially selected values.
    #[serde(default)]
    pub value: Vec<String>,
    #[serde(default)]
    pub layout: Option<String>,
}

/// Inclusive multi-selection. Each toggle adds or removes one value and
/// reports the full resulting set, never a delta.
pub struct CheckboxGroup {
    props: CheckboxGroupProps,
}

pub fn factory(props: &Props) -> UiResult<Box<dyn Component>> {
    Ok(Box::new(CheckboxGroup { props: parse_props("CheckboxGroup", props)? }))
}

impl Component for CheckboxGroup {
    fn render(&self, _scope: &RenderScope<'_>) -> UiResult<Element> {
        let mut element =
            Element::checkbox_set(self.props.options.pairs(), self.props.value.clone());
        if let Some(id) = &self.props.id {
            element.set_attr("id", id);
        }
        if let Some(layout) = &self.props.layout {
            element.set_attr("layout", layout);
        }
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderer;
    use serde_json::json;

    #[test]
    fn test_toggle_off_reports_remaining_set() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({
            "type": "ui.render",
            "component": "CheckboxGroup",
            "props": {
                "id": "features",
                "options": {"a": "A", "x": "X", "z": "Z"},
                "value": ["a", "x"]
            }
        });
        let element = renderer.render_ui(&envelope).unwrap();
        assert_eq!(element.value(), json!(["a", "x"]));

        element.toggle_option("x");
        assert_eq!(element.value(), json!(["a"]));
    }

    #[test]
    fn test_unseeded_group_starts_empty() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({
            "type": "ui.render",
            "component": "CheckboxGroup",
            "props": {"options": {"a": "A"}}
        });
        let element = renderer.render_ui(&envelope).unwrap();
        assert_eq!(element.value(), json!([]));

        element.toggle_option("a");
        assert_eq!(element.value(), json!(["a"]));
    }
}
