//! Backend Error Module
//!
//! This module defines the error taxonomy of the gateway and its conversion
//! into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use authgate::backend::error::BackendError;
//! use axum::response::Response;
//!
//! async fn handler() -> Result<Response, BackendError> {
//!     Err(BackendError::Unauthorized)
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
