/// Convenience result type used across patternflow.
pub type FlowResult<T> = Result<T, FlowError>;

/// Top-level error taxonomy used by catalog-loading APIs.
///
/// Engine control operations (start, reset, select, ...) never return errors:
/// invalid transitions are silent, well-defined no-ops because all inputs
/// originate from a trusted static catalog. Errors surface only when loading
/// or validating that catalog.
#[derive(thiserror::Error, Debug)]
pub enum FlowError {
    /// Invalid catalog or pattern data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlowError {
    /// Build a [`FlowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
