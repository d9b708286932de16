//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Module exports and body decoding
//! ├── types.rs      - Request and response types
//! ├── register.rs   - User registration handler
//! ├── login.rs      - User authentication handler
//! └── protected.rs  - Resource behind the bearer-token guard
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register
//! - **`login`** - POST /login
//! - **`protected`** - GET /protected (wrapped by `auth_middleware`)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Protected resource handler
pub mod protected;

use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;
use crate::shared::SharedError;

pub use types::{LoginRequest, MessageResponse, RegistrationRequest, TokenResponse};

pub use login::login;
pub use protected::protected;
pub use register::register;

/// Decode a JSON request body
///
/// Bodies that are not JSON, or lack a field, are `InvalidInput`; the serde
/// error text is logged but not returned.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, BackendError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Invalid request body: {}", e);
        BackendError::from(SharedError::from(e))
    })
}
