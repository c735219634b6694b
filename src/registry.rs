//! The component registry: name → factory mapping.
//!
//! Factories produce component instances from a props mapping; instances
//! live only for the render call that created them. The render capability is
//! enforced statically by the [`Component`] trait, so dynamic registration
//! checks guard what remains checkable at runtime (blank names).

use std::collections::HashMap;

use crate::element::Element;
use crate::error::{UiError, UiResult};
use crate::render::RenderScope;
use crate::spec::Props;

/// The capability contract every registered component kind satisfies.
pub trait Component {
    /// Component-specific validation beyond what deserialization enforces.
    /// Defaults to always-valid.
    fn validate_props(&self) -> UiResult<()> {
        Ok(())
    }

    /// Produce a toolkit element, rendering declared children through the
    /// scope so they re-enter the tree renderer.
    fn render(&self, scope: &RenderScope<'_>) -> UiResult<Element>;
}

pub type ComponentFactory = Box<dyn Fn(&Props) -> UiResult<Box<dyn Component>>>;

#[derive(Default)]
pub struct ComponentRegistry {
    factories: HashMap<String, ComponentFactory>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a name. Additive, immediate, and
    /// last-write-wins — no versioning.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(&Props) -> UiResult<Box<dyn Component>> + 'static,
    ) -> UiResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UiError::InvalidRegistration {
                name,
                reason: "component name must not be blank".to_string(),
            });
        }
        self.factories.insert(name, Box::new(factory));
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&ComponentFactory> {
        self.factories.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nop;

    impl Component for Nop {
        fn render(&self, _scope: &RenderScope<'_>) -> UiResult<Element> {
            Ok(Element::label("nop"))
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ComponentRegistry::new();
        registry
            .register("Nop", |_props| Ok(Box::new(Nop)))
            .unwrap();
        assert!(registry.contains("Nop"));
        assert!(registry.lookup("Other").is_none());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut registry = ComponentRegistry::new();
        let err = registry.register("   ", |_props| Ok(Box::new(Nop))).unwrap_err();
        assert!(matches!(err, UiError::InvalidRegistration { .. }));
    }
}
