use serde::Deserialize;

use crate::actions::ActionCall;
use crate::components::parse_props;
use crate::element::Element;
use crate::error::UiResult;
use crate::event::EventKind;
use crate::registry::Component;
use crate::render::RenderScope;
use crate::spec::Props;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
    Default,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Default => "btn-default",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ButtonProps {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub variant: Option<ButtonVariant>,
    /// Shorthand click action; `onClick` is the older producer spelling.
    #[serde(default, alias = "onClick")]
    pub action: Option<String>,
}

/// Clickable button with a fixed style class per variant, optional icon,
/// and an optional shorthand click action.
pub struct Button {
    props: ButtonProps,
}

pub fn factory(props: &Props) -> UiResult<Box<dyn Component>> {
    Ok(Box::new(Button { props: parse_props("Button", props)? }))
}

impl Component for Button {
    fn render(&self, scope: &RenderScope<'_>) -> UiResult<Element> {
        let mut element = Element::button(self.props.label.clone().unwrap_or_default());
        element.add_class(self.props.variant.unwrap_or(ButtonVariant::Default).class());
        if let Some(icon) = &self.props.icon {
            element.set_attr("icon", icon);
        }
        if let Some(action) = &self.props.action {
            // Unmapped actions stay inert so specs can precede handlers.
            if let Some(handler) = scope.action(action) {
                element.on(EventKind::Click, move |_| {
                    handler(&ActionCall { value: None, params: Props::new() });
                });
            }
        }
        Ok(element)
    }
}
