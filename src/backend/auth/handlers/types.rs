/**
 * Authentication Handler Types
 *
 * Request and response bodies for the register and login endpoints.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::password::MAX_PASSWORD_BYTES;
use crate::shared::SharedError;

/// Registration request
#[derive(Deserialize, Serialize, Clone)]
pub struct RegistrationRequest {
    pub username: String,
    /// Plaintext password; hashed before storage and never logged
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Clone)]
pub struct LoginRequest {
    pub username: String,
    /// Plaintext password; verified against the stored hash
    pub password: String,
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl RegistrationRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty(&self.username, &self.password)
    }
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty(&self.username, &self.password)
    }
}

fn require_non_empty(username: &str, password: &str) -> Result<(), SharedError> {
    if username.is_empty() {
        return Err(SharedError::validation("username", "must not be empty"));
    }
    if password.is_empty() {
        return Err(SharedError::validation("password", "must not be empty"));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            format!("must be at most {} bytes", MAX_PASSWORD_BYTES),
        ));
    }
    Ok(())
}

/// Plain message response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    /// Bearer token to present as `Authorization: Bearer <token>`
    pub token: String,
    /// Absolute expiry (Unix timestamp, seconds)
    pub expires_at: i64,
}
