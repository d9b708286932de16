/**
 * Backend Error Types
 *
 * Every failure the gateway can report to a client is one of six kinds.
 * Each kind maps to exactly one HTTP status and one client-facing message.
 *
 * # Error Categories
 *
 * - `InvalidInput` - client data malformed or empty (user-correctable)
 * - `Conflict` - username already registered (user-correctable)
 * - `AuthFailed` - wrong credentials or unknown user (deliberately vague)
 * - `Unauthorized` - token missing, invalid or expired (deliberately vague)
 * - `StoreUnavailable` - user store failure (transient)
 * - `InternalError` - unexpected failure, logged for operators
 *
 * Internal detail (store error text, which token check failed) is logged
 * where the error is raised and never carried into the response body.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Request data is malformed or has empty fields
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Human-readable description of the problem
        message: String,
    },

    /// The username is already registered
    #[error("Conflict: user already exists")]
    Conflict,

    /// Credentials did not match a registered user
    #[error("Authentication failed")]
    AuthFailed,

    /// No valid bearer token was presented
    #[error("Unauthorized")]
    Unauthorized,

    /// The user store could not be reached or failed
    #[error("User store unavailable")]
    StoreUnavailable,

    /// Unexpected internal failure
    #[error("Internal error")]
    InternalError,
}

impl BackendError {
    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidInput` - 400 Bad Request
    /// - `Conflict` - 409 Conflict
    /// - `AuthFailed` - 401 Unauthorized
    /// - `Unauthorized` - 401 Unauthorized
    /// - `StoreUnavailable` - 503 Service Unavailable
    /// - `InternalError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::AuthFailed | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::InvalidInput { message } => message.clone(),
            Self::Conflict => "User already exists".to_string(),
            Self::AuthFailed => "Invalid credentials".to_string(),
            Self::Unauthorized => "Unauthorized".to_string(),
            Self::StoreUnavailable => "User store unavailable".to_string(),
            Self::InternalError => "Internal server error".to_string(),
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { field, message } => {
                Self::invalid_input(format!("{} {}", field, message))
            }
            SharedError::SerializationError { .. } => Self::invalid_input("Invalid request"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            BackendError::invalid_input("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(BackendError::Conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(BackendError::AuthFailed.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(BackendError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            BackendError::StoreUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            BackendError::InternalError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_validation_error() {
        let err: BackendError = SharedError::validation("username", "must not be empty").into();
        assert_eq!(err, BackendError::invalid_input("username must not be empty"));
    }

    #[test]
    fn test_serialization_detail_not_exposed() {
        let err: BackendError = SharedError::serialization("JSON error: expected value at line 1").into();
        assert_eq!(err.message(), "Invalid request");
    }

    #[test]
    fn test_messages_are_vague() {
        assert_eq!(BackendError::AuthFailed.message(), "Invalid credentials");
        assert_eq!(BackendError::Unauthorized.message(), "Unauthorized");
    }
}
