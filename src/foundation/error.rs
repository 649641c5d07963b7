/// Convenience result type used across topreel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by composition APIs.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid configuration, timing, or frame-rate data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while interpolating animated properties.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating the scene tree for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Failure reported by a host [`crate::FontLoader`] (or any other `anyhow` source).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
