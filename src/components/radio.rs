use serde::Deserialize;

use crate::components::{parse_props, FieldOptions};
use crate::element::Element;
use crate::error::UiResult;
use crate::registry::Component;
use crate::render::RenderScope;
use crate::spec::Props;

#[derive(Debug, Clone, Deserialize)]
pub struct RadioProps {
    #[serde(default)]
    pub id: Option<String>,
    pub options: FieldOptions,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub inline: Option<bool>,
}

/// Exclusive single selection over an ordered `{value: label}` mapping;
/// emits the chosen value on change.
pub struct Radio {
    props: RadioProps,
}

pub fn factory(props: &Props) -> UiResult<Box<dyn Component>> {
    Ok(Box::new(Radio { props: parse_props("Radio", props)? }))
}

impl Component for Radio {
    fn render(&self, _scope: &RenderScope<'_>) -> UiResult<Element> {
        let mut element = Element::radio_group(self.props.options.pairs(), self.props.value.clone());
        if let Some(id) = &self.props.id {
            element.set_attr("id", id);
        }
        if self.props.inline == Some(true) {
            element.set_attr("inline", "true");
        }
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;
    use crate::error::UiError;
    use crate::render::Renderer;
    use serde_json::json;

    #[test]
    fn test_ordered_options_and_seed() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({
            "type": "ui.render",
            "component": "Radio",
            "props": {
                "id": "priority",
                "options": {"low": "Low Priority", "medium": "Medium Priority", "high": "High Priority"},
                "value": "medium",
                "inline": true
            }
        });
        let element = renderer.render_ui(&envelope).unwrap();
        assert_eq!(element.kind(), &ElementKind::RadioGroup);
        assert_eq!(element.value(), json!("medium"));
        assert_eq!(element.attr("inline"), Some("true"));
        let values: Vec<&str> = element.options().iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(values, vec!["low", "medium", "high"]);
    }

    #[test]
    fn test_options_required() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({"type": "ui.render", "component": "Radio", "props": {}});
        assert!(matches!(
            renderer.render_ui(&envelope),
            Err(UiError::InvalidProps { component, .. }) if component == "Radio"
        ));
    }

    #[test]
    fn test_selection_emits_chosen_value() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({
            "type": "ui.render",
            "component": "Radio",
            "props": {"options": {"a": "A", "b": "B"}}
        });
        let element = renderer.render_ui(&envelope).unwrap();
        element.select_option("b");
        assert_eq!(element.value(), json!("b"));
    }
}
