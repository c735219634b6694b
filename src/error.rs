use thiserror::Error;

pub type UiResult<T> = Result<T, UiError>;

#[derive(Error, Debug, Clone)]
pub enum UiError {
    #[error("Invalid envelope: expected type 'ui.render', found '{found}'")]
    InvalidEnvelope { found: String },

    #[error("Specification must include a component name")]
    MissingComponent,

    #[error("Unknown component: {component}")]
    UnknownComponent { component: String },

    #[error("Template '{template}' did not expand to a renderable specification: {reason}")]
    TemplateExpansion { template: String, reason: String },

    #[error("Invalid props for component '{component}': {reason}")]
    InvalidProps { component: String, reason: String },

    #[error("Invalid registration '{name}': {reason}")]
    InvalidRegistration { name: String, reason: String },

    #[error("Malformed specification JSON: {reason}")]
    MalformedJson { reason: String },

    #[error("Maximum nesting depth ({max_depth}) exceeded")]
    MaxNestingDepthExceeded { max_depth: usize },
}
