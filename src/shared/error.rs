//! Input errors
//!
//! Everything that can be wrong with a request before it reaches the
//! database: malformed path identifiers and field values that fail
//! validation. Both map to 400 in the backend.
//!
//! ```rust
//! use sharelist::shared::error::SharedError;
//!
//! let error = SharedError::validation("name", "Item name cannot be empty");
//! assert_eq!(error.field(), "name");
//! ```
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A request field failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError { field: String, message: String },

    /// Identifier that does not parse as a positive integer
    #[error("Invalid {kind} ID: {value}")]
    InvalidId {
        /// item, todo, note or user
        kind: &'static str,
        value: String,
    },
}

impl SharedError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_id(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidId {
            kind,
            value: value.into(),
        }
    }

    /// Name of the offending request field or path parameter
    pub fn field(&self) -> String {
        match self {
            Self::ValidationError { field, .. } => field.clone(),
            Self::InvalidId { kind, .. } => format!("{}_id", kind),
        }
    }
}
