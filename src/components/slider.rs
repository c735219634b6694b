use serde::Deserialize;

use crate::components::parse_props;
use crate::element::Element;
use crate::error::{UiError, UiResult};
use crate::registry::Component;
use crate::render::RenderScope;
use crate::spec::Props;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderProps {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub step: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub min_label: Option<String>,
    #[serde(default)]
    pub max_label: Option<String>,
    #[serde(default)]
    pub show_value: Option<bool>,
    #[serde(default)]
    pub label_always: Option<bool>,
}

/// Numeric value within `[min, max]`, stepped by `step`. End-labels and the
/// live readout are advisory attributes for the toolkit's slider primitive.
pub struct Slider {
    props: SliderProps,
}

pub fn factory(props: &Props) -> UiResult<Box<dyn Component>> {
    Ok(Box::new(Slider { props: parse_props("Slider", props)? }))
}

impl Slider {
    fn min(&self) -> f64 {
        self.props.min.unwrap_or(0.0)
    }

    fn max(&self) -> f64 {
        self.props.max.unwrap_or(100.0)
    }

    fn step(&self) -> f64 {
        self.props.step.unwrap_or(1.0)
    }
}

impl Component for Slider {
    fn validate_props(&self) -> UiResult<()> {
        if self.min() > self.max() {
            return Err(UiError::InvalidProps {
                component: "Slider".to_string(),
                reason: format!("min ({}) must not exceed max ({})", self.min(), self.max()),
            });
        }
        if self.step() <= 0.0 {
            return Err(UiError::InvalidProps {
                component: "Slider".to_string(),
                reason: format!("step ({}) must be positive", self.step()),
            });
        }
        Ok(())
    }

    fn render(&self, _scope: &RenderScope<'_>) -> UiResult<Element> {
        let initial = self.props.value.unwrap_or(self.min());
        let mut element = Element::slider(self.min(), self.max(), self.step(), initial);
        if let Some(id) = &self.props.id {
            element.set_attr("id", id);
        }
        if let Some(label) = &self.props.min_label {
            element.set_attr("min-label", label);
        }
        if let Some(label) = &self.props.max_label {
            element.set_attr("max-label", label);
        }
        if self.props.show_value == Some(true) {
            element.set_attr("show-value", "true");
        }
        if self.props.label_always == Some(true) {
            element.set_attr("label-always", "true");
        }
        Ok(element)
    }
}
