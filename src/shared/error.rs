//! Shared Error Types
//!
//! This module defines error types for failures that are independent of the
//! transport, such as request payloads that cannot be decoded or fail
//! validation.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - Data validation failures
//!
//! # Usage
//!
//! ```rust
//! use authgate::shared::error::SharedError;
//!
//! // Create a validation error
//! let error = SharedError::validation("username", "must not be empty");
//! ```
use thiserror::Error;

/// Errors raised while decoding or validating client-supplied data
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("username", "must not be empty");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "username");
                assert_eq!(message, "must not be empty");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::validation("password", "must not be empty");
        let display = format!("{}", error);
        assert!(display.contains("password"));
        assert!(display.contains("must not be empty"));
    }

    #[test]
    fn test_from_serde_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{ invalid json }");
        let shared_error: SharedError = result.unwrap_err().into();

        match shared_error {
            SharedError::SerializationError { message } => {
                assert!(message.starts_with("JSON error"));
            }
            _ => panic!("Expected SerializationError from serde error"),
        }
    }
}
