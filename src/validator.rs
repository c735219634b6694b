//! Pre-flight structural validation of specification values.
//!
//! Checks a spec's shape without instantiating components: envelope
//! sentinel, non-empty names, props/children/style/events shapes, and a
//! nesting depth cap. Hosts can reject producer output early with this;
//! the renderer re-checks everything it needs during rendering.

use serde_json::Value;

use crate::error::{UiError, UiResult};
use crate::event::EventBinding;
use crate::registry::ComponentRegistry;
use crate::spec::{self, json_kind};
use crate::style::StyleRecord;

const MAX_NESTING_DEPTH: usize = 64;

/// Validate a top-level envelope, failing on the first problem found.
pub fn validate_spec(envelope: &Value) -> UiResult<()> {
    spec::check_envelope(envelope)?;
    validate_node(envelope, 0, None)
}

/// Every problem found in a spec, in document order.
///
/// Sibling errors are all collected; within one node the first error wins
/// and its subtree is skipped.
#[derive(Debug, Default)]
pub struct ValidationReport {
    errors: Vec<UiError>,
}

impl ValidationReport {
    /// Structural checks only; any component name is accepted.
    pub fn check(envelope: &Value) -> ValidationReport {
        Self::run(envelope, None)
    }

    /// Structural checks plus unknown-name detection against a registry.
    pub fn check_with_registry(
        envelope: &Value,
        registry: &ComponentRegistry,
    ) -> ValidationReport {
        Self::run(envelope, Some(registry))
    }

    fn run(envelope: &Value, registry: Option<&ComponentRegistry>) -> ValidationReport {
        let mut report = ValidationReport::default();
        if let Err(e) = spec::check_envelope(envelope) {
            report.errors.push(e);
            return report;
        }
        report.collect_node(envelope, 0, registry);
        report
    }

    fn collect_node(&mut self, node: &Value, depth: usize, registry: Option<&ComponentRegistry>) {
        if let Err(e) = validate_node_shallow(node, depth, registry) {
            self.errors.push(e);
            return;
        }
        for child in children_of(node) {
            self.collect_node(child, depth + 1, registry);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[UiError] {
        &self.errors
    }
}

fn validate_node(node: &Value, depth: usize, registry: Option<&ComponentRegistry>) -> UiResult<()> {
    validate_node_shallow(node, depth, registry)?;
    for child in children_of(node) {
        validate_node(child, depth + 1, registry)?;
    }
    Ok(())
}

/// Checks for one node, ignoring its subtree.
fn validate_node_shallow(
    node: &Value,
    depth: usize,
    registry: Option<&ComponentRegistry>,
) -> UiResult<()> {
    if depth > MAX_NESTING_DEPTH {
        return Err(UiError::MaxNestingDepthExceeded { max_depth: MAX_NESTING_DEPTH });
    }

    let (name, props) = spec::split_spec(node)?;

    if let Some(registry) = registry {
        if !registry.contains(name) {
            return Err(UiError::UnknownComponent { component: name.to_string() });
        }
    }

    StyleRecord::from_props(name, &props)?;
    EventBinding::parse_all(name, &props)?;

    if let Some(children) = props.get("children") {
        let Value::Array(items) = children else {
            return Err(UiError::InvalidProps {
                component: name.to_string(),
                reason: format!("children must be a sequence, got {}", json_kind(children)),
            });
        };
        for item in items {
            if !item.is_object() {
                return Err(UiError::InvalidProps {
                    component: name.to_string(),
                    reason: format!(
                        "each child must be a specification mapping, got {}",
                        json_kind(item)
                    ),
                });
            }
        }
    }

    Ok(())
}

fn children_of(node: &Value) -> impl Iterator<Item = &Value> {
    node.get("props")
        .and_then(|p| p.get("children"))
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}
