//! Server Module
//!
//! Initialisation of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports and documentation
//! ├── state.rs   - AppState and FromRef implementations
//! ├── config.rs  - Store selection from configuration
//! └── init.rs    - Server initialization and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use authgate::backend::server::create_app;
//! use authgate::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use init::{create_app, create_app_with_store};
pub use state::AppState;
