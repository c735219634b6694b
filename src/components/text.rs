use serde::Deserialize;

use crate::components::parse_props;
use crate::element::Element;
use crate::error::UiResult;
use crate::registry::Component;
use crate::render::RenderScope;
use crate::spec::Props;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    H1,
    H2,
    H3,
    Label,
    Caption,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextProps {
    pub text: String,
    #[serde(default)]
    pub variant: Option<TextVariant>,
}

/// Text display with semantic emphasis: heading levels, plain label, or
/// caption styling.
pub struct Text {
    props: TextProps,
}

pub fn factory(props: &Props) -> UiResult<Box<dyn Component>> {
    Ok(Box::new(Text { props: parse_props("Text", props)? }))
}

impl Component for Text {
    fn render(&self, _scope: &RenderScope<'_>) -> UiResult<Element> {
        let mut element = Element::label(&self.props.text);
        if let Some(class) = match self.props.variant {
            Some(TextVariant::H1) => Some("text-h1"),
            Some(TextVariant::H2) => Some("text-h2"),
            Some(TextVariant::H3) => Some("text-h3"),
            Some(TextVariant::Caption) => Some("text-caption"),
            Some(TextVariant::Label) | None => None,
        } {
            element.add_class(class);
        }
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;
    use crate::render::Renderer;
    use serde_json::json;

    #[test]
    fn test_heading_variant_adds_class() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({
            "type": "ui.render",
            "component": "Text",
            "props": {"text": "Hello", "variant": "h1"}
        });
        let element = renderer.render_ui(&envelope).unwrap();
        assert_eq!(element.text_content(), "Hello");
        assert!(element.has_class("text-h1"));
    }

    #[test]
    fn test_text_is_required() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({"type": "ui.render", "component": "Text", "props": {}});
        assert!(matches!(
            renderer.render_ui(&envelope),
            Err(UiError::InvalidProps { component, .. }) if component == "Text"
        ));
    }
}
