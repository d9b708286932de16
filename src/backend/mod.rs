//! Backend Module
//!
//! Server-side code for the authentication gateway.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── auth/        - Password codec, tokens, register/login flows, handlers
//! ├── middleware/  - Bearer-token guard
//! ├── store/       - User store trait and implementations
//! ├── error/       - Error taxonomy and HTTP conversion
//! ├── routes/      - Router assembly
//! └── server/      - State and initialization
//! ```
//!
//! # Request Flow
//!
//! - `POST /register`, `POST /login` → `auth::handlers` → `auth::flow::AuthService`
//!   → password codec and user store (login also issues a token)
//! - `GET /protected` → `middleware::auth_middleware` → token service →
//!   protected handler

/// Authentication: passwords, tokens, flows, handlers
pub mod auth;

/// HTTP middleware
pub mod middleware;

/// User store
pub mod store;

/// Error types
pub mod error;

/// Route configuration
pub mod routes;

/// Server initialization and state
pub mod server;

pub use error::BackendError;
pub use server::{create_app, AppState};
