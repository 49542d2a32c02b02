//! Error types for field rendering.

use thiserror::Error;

/// Field rendering errors.
///
/// Only conditions the caller must act on are represented here. An unknown
/// field type falls back to a text input and a repeated caller attribute
/// overwrites the earlier one; both are logged, neither is an error.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The renderer's key has no entry in the field description.
    #[error("no field description for key `{key}`")]
    MissingFieldDescription { key: String },

    /// The metadata document could not be parsed.
    #[error("invalid field metadata: {0}")]
    InvalidMetadata(#[source] serde_json::Error),

    /// An OPTIONS response has no `actions.<method>` block.
    #[error("OPTIONS response has no actions for method {method}")]
    MissingActions { method: String },

    /// The binding conventions could not be parsed.
    #[error("invalid binding conventions: {0}")]
    InvalidConventions(#[source] serde_json::Error),
}

impl FieldError {
    /// Creates a missing description error for `key`.
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingFieldDescription { key: key.into() }
    }

    /// Returns whether this error is a missing field description.
    #[must_use]
    pub const fn is_missing_description(&self) -> bool {
        matches!(self, Self::MissingFieldDescription { .. })
    }
}

/// Result type alias for field operations.
pub type Result<T> = std::result::Result<T, FieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_description_message() {
        let err = FieldError::missing("title");
        assert!(err.is_missing_description());
        assert_eq!(err.to_string(), "no field description for key `title`");
    }

    #[test]
    fn test_invalid_metadata_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FieldError::InvalidMetadata(source);
        assert!(!err.is_missing_description());
        assert!(std::error::Error::source(&err).is_some());
    }
}
