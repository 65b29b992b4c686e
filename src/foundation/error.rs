/// Result alias used across the crate.
pub type ReelResult<T> = Result<T, ReelError>;

/// Error type for reel construction, evaluation, rendering and encoding.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid input (config, ranges, timeline structure).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid animation parameters.
    #[error("animation error: {0}")]
    Animation(String),

    /// Failure while evaluating a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Failure while rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Failure while writing frames or artifacts.
    #[error("encode error: {0}")]
    Encode(String),

    /// (De)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ReelError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ReelError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ReelError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ReelError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
