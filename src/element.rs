//! The retained toolkit element produced by every render.
//!
//! This is the host-toolkit capability set the renderer requires, realized
//! as an in-memory widget tree: a labeled-text primitive, a button with
//! click binding, five input primitives with change binding, three container
//! primitives, and value-bearing radio/checkbox-set/slider primitives that
//! report the new value on change. A native toolkit adapter walks this tree
//! and mirrors interactions back through the entry points below.
//!
//! All interactive state ("current selection") lives here, never in a
//! component instance; its lifetime is exactly the element's.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use serde_json::Value;

use crate::event::EventKind;

/// Handler wired onto an element for one event kind.
///
/// Receives the element's current value for value-carrying kinds
/// (`change`/`slide`), `None` otherwise.
pub type ElementHandler = Rc<dyn Fn(Option<&Value>)>;

/// The primitive kinds the renderer can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Label,
    Button,
    TextInput,
    TextArea,
    Select,
    Checkbox,
    NumberInput,
    Column,
    Row,
    Grid { columns: u32 },
    RadioGroup,
    CheckboxSet,
    Slider { min: f64, max: f64, step: f64 },
}

pub struct Element {
    kind: ElementKind,
    text: Option<String>,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    attrs: BTreeMap<String, String>,
    options: Vec<(String, String)>,
    value: RefCell<Value>,
    handlers: RefCell<Vec<(EventKind, ElementHandler)>>,
    children: Vec<Rc<Element>>,
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("kind", &self.kind)
            .field("text", &self.text)
            .field("classes", &self.classes)
            .field("styles", &self.styles)
            .field("attrs", &self.attrs)
            .field("value", &*self.value.borrow())
            .field("children", &self.children)
            .finish()
    }
}

// ─── Constructors ────────────────────────────────────────────────────────────

impl Element {
    fn new(kind: ElementKind) -> Element {
        Element {
            kind,
            text: None,
            classes: BTreeSet::new(),
            styles: BTreeMap::new(),
            attrs: BTreeMap::new(),
            options: Vec::new(),
            value: RefCell::new(Value::Null),
            handlers: RefCell::new(Vec::new()),
            children: Vec::new(),
        }
    }

    pub fn label(text: impl Into<String>) -> Element {
        let mut el = Element::new(ElementKind::Label);
        el.text = Some(text.into());
        el
    }

    pub fn button(label: impl Into<String>) -> Element {
        let mut el = Element::new(ElementKind::Button);
        el.text = Some(label.into());
        el
    }

    pub fn text_input(initial: Option<String>) -> Element {
        let el = Element::new(ElementKind::TextInput);
        if let Some(v) = initial {
            *el.value.borrow_mut() = Value::String(v);
        }
        el
    }

    pub fn text_area(initial: Option<String>) -> Element {
        let el = Element::new(ElementKind::TextArea);
        if let Some(v) = initial {
            *el.value.borrow_mut() = Value::String(v);
        }
        el
    }

    pub fn select(options: Vec<(String, String)>, initial: Option<String>) -> Element {
        let mut el = Element::new(ElementKind::Select);
        el.options = options;
        if let Some(v) = initial {
            *el.value.borrow_mut() = Value::String(v);
        }
        el
    }

    pub fn checkbox(label: Option<String>, checked: bool) -> Element {
        let mut el = Element::new(ElementKind::Checkbox);
        el.text = label;
        *el.value.borrow_mut() = Value::Bool(checked);
        el
    }

    pub fn number_input(initial: Option<f64>) -> Element {
        let el = Element::new(ElementKind::NumberInput);
        if let Some(v) = initial {
            *el.value.borrow_mut() = Value::from(v);
        }
        el
    }

    pub fn column() -> Element {
        Element::new(ElementKind::Column)
    }

    pub fn row() -> Element {
        Element::new(ElementKind::Row)
    }

    pub fn grid(columns: u32) -> Element {
        Element::new(ElementKind::Grid { columns })
    }

    pub fn radio_group(options: Vec<(String, String)>, initial: Option<String>) -> Element {
        let mut el = Element::new(ElementKind::RadioGroup);
        el.options = options;
        if let Some(v) = initial {
            *el.value.borrow_mut() = Value::String(v);
        }
        el
    }

    pub fn checkbox_set(options: Vec<(String, String)>, initial: Vec<String>) -> Element {
        let mut el = Element::new(ElementKind::CheckboxSet);
        el.options = options;
        *el.value.borrow_mut() = Value::Array(initial.into_iter().map(Value::String).collect());
        el
    }

    pub fn slider(min: f64, max: f64, step: f64, initial: f64) -> Element {
        let el = Element::new(ElementKind::Slider { min, max, step });
        *el.value.borrow_mut() = Value::from(initial.clamp(min, max));
        el
    }
}

// ─── Decoration (build-time mutation) ────────────────────────────────────────

impl Element {
    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.insert(class.into());
    }

    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.styles.insert(property.into(), value.into());
    }

    /// Advisory attributes passed through to the toolkit (e.g. `required`,
    /// `placeholder`, slider end-labels). Never enforced by the renderer.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn push_child(&mut self, child: Rc<Element>) {
        self.children.push(child);
    }

    /// Wire a handler for one event kind. Shared elements stay wirable, so
    /// composites can attach collectors after a child is rendered.
    pub fn on(&self, kind: EventKind, handler: impl Fn(Option<&Value>) + 'static) {
        self.handlers.borrow_mut().push((kind, Rc::new(handler)));
    }
}

// ─── Accessors ───────────────────────────────────────────────────────────────

impl Element {
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Concatenated text of this element and all descendants, in order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn options(&self) -> &[(String, String)] {
        &self.options
    }

    pub fn children(&self) -> &[Rc<Element>] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Rc<Element>> {
        self.children.get(index)
    }

    pub fn value(&self) -> Value {
        self.value.borrow().clone()
    }

    pub fn number_value(&self) -> Option<f64> {
        self.value.borrow().as_f64()
    }
}

// ─── Interaction entry points ────────────────────────────────────────────────

impl Element {
    fn fire(&self, kind: EventKind) {
        // Snapshot handlers and value before invoking: handlers may re-read
        // the element.
        let matching: Vec<ElementHandler> = self
            .handlers
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, h)| Rc::clone(h))
            .collect();
        let value = if kind.carries_value() {
            Some(self.value.borrow().clone())
        } else {
            None
        };
        for handler in matching {
            handler(value.as_ref());
        }
    }

    pub fn click(&self) {
        self.fire(EventKind::Click);
    }

    pub fn submit(&self) {
        self.fire(EventKind::Submit);
    }

    pub fn keydown(&self) {
        self.fire(EventKind::Keydown);
    }

    pub fn focus(&self) {
        self.fire(EventKind::Focus);
    }

    pub fn blur(&self) {
        self.fire(EventKind::Blur);
    }

    /// Replace the current value and report the change.
    pub fn set_value(&self, value: Value) {
        *self.value.borrow_mut() = value;
        self.fire(EventKind::Change);
    }

    /// Exclusive selection for radio groups and selects.
    pub fn select_option(&self, option: &str) {
        self.set_value(Value::String(option.to_string()));
    }

    /// Inclusive toggle for checkbox sets. Adds the option when absent,
    /// removes it when present, then reports the full resulting set.
    pub fn toggle_option(&self, option: &str) {
        let mut selected: Vec<String> = match &*self.value.borrow() {
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };
        match selected.iter().position(|s| s == option) {
            Some(index) => {
                selected.remove(index);
            }
            None => selected.push(option.to_string()),
        }
        self.set_value(Value::Array(selected.into_iter().map(Value::String).collect()));
    }

    /// Move a slider to `value`, clamped to its range, and report it.
    pub fn slide_to(&self, value: f64) {
        let ElementKind::Slider { min, max, .. } = self.kind else {
            return;
        };
        *self.value.borrow_mut() = Value::from(value.clamp(min, max));
        self.fire(EventKind::Slide);
        self.fire(EventKind::Change);
    }

    /// Step a slider up by its configured step.
    pub fn increment(&self) {
        if let ElementKind::Slider { step, .. } = self.kind {
            let current = self.number_value().unwrap_or(0.0);
            self.slide_to(current + step);
        }
    }

    /// Step a slider down by its configured step.
    pub fn decrement(&self) {
        if let ElementKind::Slider { step, .. } = self.kind {
            let current = self.number_value().unwrap_or(0.0);
            self.slide_to(current - step);
        }
    }
}
