use serde::Deserialize;
use serde_json::Value;

use crate::components::parse_props;
use crate::element::Element;
use crate::error::UiResult;
use crate::registry::Component;
use crate::render::RenderScope;
use crate::spec::Props;

#[derive(Debug, Clone, Deserialize)]
pub struct CardProps {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub children: Vec<Value>,
}

/// Structural composite: wraps its children with an optional title.
pub struct Card {
    props: CardProps,
}

pub fn factory(props: &Props) -> UiResult<Box<dyn Component>> {
    Ok(Box::new(Card { props: parse_props("Card", props)? }))
}

impl Component for Card {
    fn render(&self, scope: &RenderScope<'_>) -> UiResult<Element> {
        let mut root = Element::column();
        root.add_class("card");
        if let Some(title) = &self.props.title {
            let mut heading = Element::label(title);
            heading.add_class("card-title");
            root.push_child(heading.into());
        }
        for child in &self.props.children {
            root.push_child(scope.render_child(child)?);
        }
        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderer;
    use serde_json::json;

    #[test]
    fn test_title_then_children_in_order() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({
            "type": "ui.render",
            "component": "Card",
            "props": {
                "title": "Account",
                "children": [
                    {"component": "Text", "props": {"text": "Signed in as ada"}},
                    {"component": "Button", "props": {"label": "Sign out"}}
                ]
            }
        });
        let element = renderer.render_ui(&envelope).unwrap();
        assert!(element.has_class("card"));
        assert_eq!(element.children().len(), 3);
        assert!(element.child(0).unwrap().has_class("card-title"));
        assert_eq!(element.child(0).unwrap().text(), Some("Account"));
        assert_eq!(element.child(2).unwrap().text(), Some("Sign out"));
    }

    #[test]
    fn test_untitled_card_has_only_children() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({
            "type": "ui.render",
            "component": "Card",
            "props": {"children": [{"component": "Text", "props": {"text": "body"}}]}
        });
        let element = renderer.render_ui(&envelope).unwrap();
        assert_eq!(element.children().len(), 1);
        assert_eq!(element.child(0).unwrap().text(), Some("body"));
    }
}
