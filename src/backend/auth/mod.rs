//! Authentication Module
//!
//! This module handles user registration, login and bearer tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports and documentation
//! ├── password.rs  - bcrypt password codec
//! ├── sessions.rs  - Token issuance and validation
//! ├── flow.rs      - Registration and login flows
//! └── handlers/    - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username and password → password hashed → credential stored
//! 2. **Login**: username and password → hash verified → token returned
//! 3. **Protected**: `Authorization: Bearer <token>` → token verified → resource served
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs validated without server-side state
//! - Login and token failures return 401 without saying which check failed

/// bcrypt password codec
pub mod password;

/// Token issuance and validation
pub mod sessions;

/// Registration and login flows
pub mod flow;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use flow::AuthService;
pub use handlers::types::{LoginRequest, RegistrationRequest};
pub use handlers::{login, protected, register};
pub use password::{EncodingError, PasswordCodec};
pub use sessions::{Claims, IssuedToken, TokenError, TokenService};
