use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::style::StyleRecord;

/// Default styling applied per component kind.
///
/// Theme defaults are layered beneath explicit per-instance styles, so a
/// spec's own style record always wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub components: HashMap<String, StyleRecord>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register default styling for a component kind. Last write wins.
    pub fn set(&mut self, component: impl Into<String>, record: StyleRecord) {
        self.components.insert(component.into(), record);
    }

    pub fn component(&self, name: &str) -> Option<&StyleRecord> {
        self.components.get(name)
    }
}
