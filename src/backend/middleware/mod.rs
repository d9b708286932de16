//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer-token guard for protected routes

pub mod auth;

pub use auth::{auth_middleware, authorize, extract_bearer, protect};
