use crate::foundation::core::VerticalAlignment;

/// Convenience result type used across declayout.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    /// A layout was requested along an alignment the algorithm cannot honor
    /// (baseline alignment on an overlay or horizontal stack).
    #[error("unsupported alignment: {0:?} is not supported by this layout")]
    UnsupportedAlignment(VerticalAlignment),

    /// The proposed target size has a negative or NaN component.
    #[error("malformed constraint: {0}")]
    MalformedConstraint(String),

    /// Invalid user-provided settings, node parameters or tree content.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl LayoutError {
    /// Build a [`LayoutError::MalformedConstraint`] value.
    pub fn malformed_constraint(msg: impl Into<String>) -> Self {
        Self::MalformedConstraint(msg.into())
    }

    /// Build a [`LayoutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayoutError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
