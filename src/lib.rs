//! # MondrUI
//!
//! A runtime rendering engine for JSON UI specifications.
//!
//! A producer (typically a conversational AI backend) emits a `ui.render`
//! envelope naming a component and its props; the renderer turns it into a
//! toolkit element tree, expanding registered templates, applying styles and
//! theme defaults, and wiring events to registered action handlers.
//!
//! ## Features
//! - Component registry with ten built-in kinds, open to custom factories
//! - Template registry with `{{identifier}}` placeholder substitution
//! - Recursive tree rendering with envelope validation and depth guarding
//! - Style and event binding with per-component theme defaults
//! - Action handler and value collector tables for host interaction
//!
//! ## Example
//! ```ignore
//! use mondrui::Renderer;
//! use serde_json::json;
//!
//! let renderer = Renderer::with_builtins();
//! let element = renderer.render_ui(&json!({
//!     "type": "ui.render",
//!     "component": "Container",
//!     "props": {
//!         "layout": "vertical",
//!         "children": [
//!             {"component": "Text", "props": {"text": "Hello", "variant": "h1"}},
//!             {"component": "Button", "props": {"label": "Go", "variant": "primary"}}
//!         ]
//!     }
//! })).expect("render failed");
//! assert_eq!(element.children().len(), 2);
//! ```

pub mod actions;
pub mod binder;
pub mod components;
pub mod element;
pub mod error;
pub mod event;
pub mod extract;
pub mod memory;
pub mod registry;
pub mod render;
pub mod spec;
pub mod style;
pub mod template;
pub mod theme;
pub mod validator;

// --- Core types ---
pub use actions::{ActionCall, ActionHandler, ActionTable, CollectorTable, ValueCollector};
pub use element::{Element, ElementHandler, ElementKind};
pub use error::{UiError, UiResult};
pub use event::{EventBinding, EventKind};
pub use registry::{Component, ComponentRegistry};
pub use render::{RenderScope, Renderer, MAX_TEMPLATE_DEPTH};
pub use spec::{Props, ENVELOPE_KIND};
pub use style::StyleRecord;
pub use template::TemplateRegistry;
pub use theme::Theme;

// --- Collaborators ---
pub use extract::{extract_ui_spec, Extraction};
pub use memory::{ConversationMemory, MemoryStats};
pub use validator::{validate_spec, ValidationReport};
