use serde::Deserialize;
use serde_json::Value;

use crate::components::parse_props;
use crate::element::Element;
use crate::error::{UiError, UiResult};
use crate::registry::Component;
use crate::render::RenderScope;
use crate::spec::Props;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Vertical,
    Horizontal,
    Grid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContainerProps {
    /// `direction` is the older producer spelling for the same prop.
    #[serde(default, alias = "direction")]
    pub layout: Option<Layout>,
    #[serde(default)]
    pub columns: Option<u32>,
    #[serde(default)]
    pub children: Vec<Value>,
}

/// Layout container: vertical stack, horizontal row, or grid with a column
/// count from props. Renders its children inside, in declared order.
pub struct Container {
    props: ContainerProps,
}

pub fn factory(props: &Props) -> UiResult<Box<dyn Component>> {
    Ok(Box::new(Container { props: parse_props("Container", props)? }))
}

impl Component for Container {
    fn validate_props(&self) -> UiResult<()> {
        if self.props.layout == Some(Layout::Grid) {
            match self.props.columns {
                Some(columns) if columns >= 1 => {}
                _ => {
                    return Err(UiError::InvalidProps {
                        component: "Container".to_string(),
                        reason: "grid layout requires 'columns' of at least 1".to_string(),
                    })
                }
            }
        }
        Ok(())
    }

    fn render(&self, scope: &RenderScope<'_>) -> UiResult<Element> {
        let mut element = match self.props.layout.unwrap_or(Layout::Vertical) {
            Layout::Vertical => Element::column(),
            Layout::Horizontal => Element::row(),
            Layout::Grid => Element::grid(self.props.columns.unwrap_or(1)),
        };
        for child in &self.props.children {
            element.push_child(scope.render_child(child)?);
        }
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;
    use crate::render::Renderer;
    use serde_json::json;

    #[test]
    fn test_children_render_in_declared_order() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({
            "type": "ui.render",
            "component": "Container",
            "props": {
                "layout": "horizontal",
                "children": [
                    {"component": "Text", "props": {"text": "first"}},
                    {"component": "Text", "props": {"text": "second"}}
                ]
            }
        });
        let element = renderer.render_ui(&envelope).unwrap();
        assert_eq!(element.kind(), &ElementKind::Row);
        assert_eq!(element.child(0).unwrap().text(), Some("first"));
        assert_eq!(element.child(1).unwrap().text(), Some("second"));
    }

    #[test]
    fn test_grid_requires_columns() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({
            "type": "ui.render",
            "component": "Container",
            "props": {"layout": "grid"}
        });
        assert!(matches!(
            renderer.render_ui(&envelope),
            Err(UiError::InvalidProps { component, .. }) if component == "Container"
        ));
    }

    #[test]
    fn test_direction_alias_accepted() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({
            "type": "ui.render",
            "component": "Container",
            "props": {"direction": "horizontal"}
        });
        let element = renderer.render_ui(&envelope).unwrap();
        assert_eq!(element.kind(), &ElementKind::Row);
    }

    #[test]
    fn test_grid_layout() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({
            "type": "ui.render",
            "component": "Container",
            "props": {"layout": "grid", "columns": 3}
        });
        let element = renderer.render_ui(&envelope).unwrap();
        assert_eq!(element.kind(), &ElementKind::Grid { columns: 3 });
    }
}
