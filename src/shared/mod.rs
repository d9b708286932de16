//! Shared Module
//!
//! Transport-independent types: configuration and the errors raised while
//! decoding and validating client data.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
