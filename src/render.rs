//! The tree renderer and its rendering context.
//!
//! [`Renderer`] is an explicit context — component registry, template
//! registry, action handler table, value collectors, theme — passed into
//! every render call instead of ambient global state, so tests and
//! multi-tenant hosts get isolated contexts for free.
//!
//! Rendering is single-threaded, synchronous, and stateless per call: a
//! `render_ui` invocation fully constructs the element tree before
//! returning. Registries are written during setup and read during renders;
//! register everything before the first render.

use std::rc::Rc;

use serde_json::Value;

use crate::actions::{ActionCall, ActionHandler, ActionTable, CollectorTable, ValueCollector};
use crate::binder;
use crate::components;
use crate::element::Element;
use crate::error::{UiError, UiResult};
use crate::registry::{Component, ComponentRegistry};
use crate::spec::{self, Props};
use crate::template::{self, TemplateRegistry};
use crate::theme::Theme;

/// Template-expansion depth guard: converts template cycles (A expands to A)
/// into a reportable error instead of unbounded recursion.
pub const MAX_TEMPLATE_DEPTH: usize = 32;

pub struct Renderer {
    components: ComponentRegistry,
    templates: TemplateRegistry,
    actions: ActionTable,
    collectors: CollectorTable,
    theme: Theme,
}

impl Renderer {
    /// An empty context with no registered component kinds.
    pub fn new() -> Renderer {
        Renderer {
            components: ComponentRegistry::new(),
            templates: TemplateRegistry::new(),
            actions: ActionTable::new(),
            collectors: CollectorTable::new(),
            theme: Theme::new(),
        }
    }

    /// A context with the ten built-in component kinds registered.
    pub fn with_builtins() -> Renderer {
        let mut renderer = Renderer::new();
        components::register_builtins(&mut renderer.components)
            .expect("built-in component names are valid");
        renderer
    }

    // ─── Setup (write side) ──────────────────────────────────────────────

    pub fn register_component(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(&Props) -> UiResult<Box<dyn Component>> + 'static,
    ) -> UiResult<()> {
        self.components.register(name, factory)
    }

    pub fn register_template(&mut self, name: impl Into<String>, template: Value) -> UiResult<()> {
        self.templates.register(name, template)
    }

    pub fn register_action_handler(
        &mut self,
        name: impl Into<String>,
        handler: impl Fn(&ActionCall) + 'static,
    ) {
        self.actions.register(name, handler);
    }

    pub fn register_value_collector(
        &mut self,
        field_id: impl Into<String>,
        collector: impl Fn(&Value) + 'static,
    ) {
        self.collectors.register(field_id, collector);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    // ─── Read side ───────────────────────────────────────────────────────

    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    pub fn actions(&self) -> &ActionTable {
        &self.actions
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Render a top-level specification envelope into an element tree.
    pub fn render_ui(&self, envelope: &Value) -> UiResult<Rc<Element>> {
        spec::check_envelope(envelope)?;
        self.render_value(envelope, 0)
    }

    /// Parse a JSON string and render it as a top-level envelope.
    pub fn render_json(&self, json: &str) -> UiResult<Rc<Element>> {
        let envelope: Value = serde_json::from_str(json)
            .map_err(|e| UiError::MalformedJson { reason: e.to_string() })?;
        self.render_ui(&envelope)
    }

    /// Render any spec-shaped value. Template names win over component
    /// names; unknown names fail with the exact unresolved string.
    fn render_value(&self, value: &Value, depth: usize) -> UiResult<Rc<Element>> {
        let (name, props) = spec::split_spec(value)?;

        if let Some(stored) = self.templates.lookup(name) {
            if depth >= MAX_TEMPLATE_DEPTH {
                return Err(UiError::TemplateExpansion {
                    template: name.to_string(),
                    reason: format!(
                        "expansion exceeded {} levels; templates may be cyclic",
                        MAX_TEMPLATE_DEPTH
                    ),
                });
            }
            let expanded = template::expand(name, stored, &props)?;
            return self.render_value(&expanded, depth + 1);
        }

        let Some(factory) = self.components.lookup(name) else {
            return Err(UiError::UnknownComponent { component: name.to_string() });
        };

        let instance = factory(&props)?;
        instance.validate_props()?;

        let scope = RenderScope { renderer: self, depth };
        let mut element = instance.render(&scope)?;
        binder::decorate(&mut element, name, &props, self)?;
        Ok(Rc::new(element))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::with_builtins()
    }
}

/// The per-call view components render through.
///
/// Children rendered here re-enter the tree renderer, preserving the depth
/// guard, template priority, and uniform decoration.
pub struct RenderScope<'a> {
    renderer: &'a Renderer,
    depth: usize,
}

impl RenderScope<'_> {
    /// Render a nested child spec. Children need not carry the envelope
    /// `type` field and render in exactly the order the caller iterates.
    pub fn render_child(&self, spec: &Value) -> UiResult<Rc<Element>> {
        self.renderer.render_value(spec, self.depth)
    }

    pub fn action(&self, name: &str) -> Option<ActionHandler> {
        self.renderer.actions.get(name)
    }

    pub fn collector(&self, field_id: &str) -> Option<ValueCollector> {
        self.renderer.collectors.get(field_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_priority_over_component() {
        let mut renderer = Renderer::with_builtins();
        renderer
            .register_template(
                "Text",
                json!({"component": "Button", "props": {"label": "{{text}}"}}),
            )
            .unwrap();

        let envelope = json!({"type": "ui.render", "component": "Text", "props": {"text": "Go"}});
        let element = renderer.render_ui(&envelope).unwrap();
        assert_eq!(element.kind(), &crate::element::ElementKind::Button);
        assert_eq!(element.text(), Some("Go"));
    }

    #[test]
    fn test_cyclic_template_detected() {
        let mut renderer = Renderer::with_builtins();
        renderer
            .register_template("Loop", json!({"component": "Loop", "props": {}}))
            .unwrap();

        let envelope = json!({"type": "ui.render", "component": "Loop", "props": {}});
        let err = renderer.render_ui(&envelope).unwrap_err();
        assert!(matches!(err, UiError::TemplateExpansion { template, .. } if template == "Loop"));
    }

    #[test]
    fn test_unknown_component_carries_name() {
        let renderer = Renderer::with_builtins();
        let envelope = json!({"type": "ui.render", "component": "Nope", "props": {}});
        let err = renderer.render_ui(&envelope).unwrap_err();
        assert!(matches!(err, UiError::UnknownComponent { component } if component == "Nope"));
    }

    #[test]
    fn test_render_json_reports_syntax_errors() {
        let renderer = Renderer::with_builtins();
        let err = renderer.render_json("{\"type\": \"ui.render\", ").unwrap_err();
        assert!(matches!(err, UiError::MalformedJson { .. }));
    }
}
