/// Convenience result type used across tickgif.
pub type TickgifResult<T> = Result<T, TickgifError>;

/// Top-level error taxonomy used by the rendering pipeline.
#[derive(thiserror::Error, Debug)]
pub enum TickgifError {
    /// Invalid caller-provided data or an internal contract violation.
    #[error("validation error: {0}")]
    Validation(String),

    /// The fallback font could not be read or parsed at startup.
    #[error("font error: {0}")]
    Font(String),

    /// The animation could not be assembled into a GIF byte stream.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TickgifError {
    /// Build a [`TickgifError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TickgifError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`TickgifError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
