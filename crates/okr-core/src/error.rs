//! Error types for the OKR library.

use std::fmt;

use thiserror::Error;

/// Error type for the fallible edges of the library.
///
/// Session mutations never fail; these variants cover parsing user input at
/// the boundary and handing a finished objective to a save collaborator.
#[derive(Error, Debug)]
pub enum OkrError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The save collaborator rejected a record
    #[error("Save failed: {message}")]
    Save { message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> OkrError {
        OkrError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl OkrError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a save error from any displayable cause.
    pub fn save(message: impl fmt::Display) -> Self {
        Self::Save {
            message: message.to_string(),
        }
    }
}

/// Result type alias for OKR operations
pub type Result<T> = std::result::Result<T, OkrError>;
