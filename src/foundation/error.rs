/// Convenience result type used across Vivify.
pub type VivifyResult<T> = Result<T, VivifyError>;

/// Top-level error taxonomy used by renderer APIs.
///
/// Nothing in the per-frame path is allowed to panic; every failure either
/// degrades to "no overlay frame" or surfaces as one of these variants.
#[derive(thiserror::Error, Debug)]
pub enum VivifyError {
    /// Invalid caller-provided data (sizes, landmark payloads).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors from the landmark provider or fetch plumbing.
    #[error("landmark error: {0}")]
    Landmark(String),

    /// Errors while rasterizing the overlay surface.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VivifyError {
    /// Build a [`VivifyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VivifyError::Landmark`] value.
    pub fn landmark(msg: impl Into<String>) -> Self {
        Self::Landmark(msg.into())
    }

    /// Build a [`VivifyError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
