//! Cross-cutting style application and event wiring.
//!
//! Applied uniformly after a component produces its raw element, before the
//! element is returned to its parent: theme defaults first, then the
//! instance's own style record (instance wins), then declarative event
//! bindings wired through the action handler table.

use crate::actions::ActionCall;
use crate::element::Element;
use crate::error::UiResult;
use crate::event::EventBinding;
use crate::render::Renderer;
use crate::spec::Props;
use crate::style::StyleRecord;

pub fn decorate(
    element: &mut Element,
    component: &str,
    props: &Props,
    renderer: &Renderer,
) -> UiResult<()> {
    // Theme defaults go on first so explicit per-instance styles override.
    if let Some(defaults) = renderer.theme().component(component) {
        defaults.apply(element);
    }
    if let Some(record) = StyleRecord::from_props(component, props)? {
        record.apply(element);
    }

    for binding in EventBinding::parse_all(component, props)? {
        bind(element, binding, renderer);
    }
    Ok(())
}

fn bind(element: &Element, binding: EventBinding, renderer: &Renderer) {
    let Some(handler) = renderer.actions().get(&binding.action) else {
        // Specs may be authored before handlers exist; an unmapped action
        // is inert, not an error.
        log::debug!(
            "no handler registered for action '{}'; '{}' binding is inert",
            binding.action,
            binding.kind.as_str()
        );
        return;
    };
    let params = binding.params;
    element.on(binding.kind, move |value| {
        handler(&ActionCall { value: value.cloned(), params: params.clone() });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderer;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn props(value: serde_json::Value) -> Props {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_theme_defaults_lose_to_instance_styles() {
        let mut renderer = Renderer::new();
        let mut theme = crate::theme::Theme::new();
        theme.set(
            "Button",
            StyleRecord {
                classes: ["themed".to_string()].into(),
                color: Some("#111".to_string()),
                ..Default::default()
            },
        );
        renderer.set_theme(theme);

        let mut element = Element::button("Go");
        let props = props(json!({"style": {"color": "#fff"}}));
        decorate(&mut element, "Button", &props, &renderer).unwrap();

        assert!(element.has_class("themed"));
        assert_eq!(element.style("color"), Some("#fff"));
    }

    #[test]
    fn test_click_binding_invokes_handler_with_params() {
        let mut renderer = Renderer::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        renderer.register_action_handler("openSettings", move |call: &ActionCall| {
            sink.borrow_mut().push(call.clone());
        });

        let mut element = Element::button("Settings");
        let props = props(json!({
            "events": {"click": {"action": "openSettings", "params": {"tab": "general"}}}
        }));
        decorate(&mut element, "Button", &props, &renderer).unwrap();

        element.click();
        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].value, None);
        assert_eq!(calls[0].params.get("tab"), Some(&json!("general")));
    }

    #[test]
    fn test_unmapped_action_is_inert() {
        let renderer = Renderer::new();
        let mut element = Element::button("Go");
        let props = props(json!({"events": {"click": "nobodyHome"}}));
        decorate(&mut element, "Button", &props, &renderer).unwrap();
        element.click(); // must not panic or error
    }

    #[test]
    fn test_change_binding_carries_value() {
        let mut renderer = Renderer::new();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        renderer.register_action_handler("search", move |call: &ActionCall| {
            *sink.borrow_mut() = call.value.clone();
        });

        let mut element = Element::text_input(None);
        let props = props(json!({"events": {"change": "search"}}));
        decorate(&mut element, "Input", &props, &renderer).unwrap();

        element.set_value(json!("rust"));
        assert_eq!(*seen.borrow(), Some(json!("rust")));
    }
}
