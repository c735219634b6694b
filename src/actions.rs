//! Host-supplied callback tables.
//!
//! The action handler table connects declared event bindings to application
//! logic; value collectors accumulate form field values for the host (the
//! Form component never collects values itself). Both are populated during
//! setup and only read during renders.

use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use crate::spec::Props;

/// One invocation of a named action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionCall {
    /// The element's current value for `change`/`slide` bindings, absent for
    /// `click`/`submit`.
    pub value: Option<Value>,
    /// Extra parameters declared on the binding.
    pub params: Props,
}

pub type ActionHandler = Rc<dyn Fn(&ActionCall)>;

/// Name → handler table. Registration is additive and last-write-wins;
/// the renderer never mutates it.
#[derive(Default)]
pub struct ActionTable {
    handlers: HashMap<String, ActionHandler>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, handler: impl Fn(&ActionCall) + 'static) {
        self.handlers.insert(name.into(), Rc::new(handler));
    }

    pub fn get(&self, name: &str) -> Option<ActionHandler> {
        self.handlers.get(name).map(Rc::clone)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }
}

pub type ValueCollector = Rc<dyn Fn(&Value)>;

/// Field id → value-collector table, invoked on every change of a form field
/// with the field's current value.
#[derive(Default)]
pub struct CollectorTable {
    collectors: HashMap<String, ValueCollector>,
}

impl CollectorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, field_id: impl Into<String>, collector: impl Fn(&Value) + 'static) {
        self.collectors.insert(field_id.into(), Rc::new(collector));
    }

    pub fn get(&self, field_id: &str) -> Option<ValueCollector> {
        self.collectors.get(field_id).map(Rc::clone)
    }
}
