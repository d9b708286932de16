//! authgate - Minimal Authentication Gateway
//!
//! Registers users, authenticates them, and issues and validates bearer
//! tokens guarding a protected resource.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration and validation errors
//! - **`backend`** - Password codec, token service, access middleware,
//!   register/login flows, user store and the Axum server
//!
//! # Usage
//!
//! ```rust,no_run
//! use authgate::backend::server::create_app;
//! use authgate::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder().jwt_secret("change-me").build()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod shared;
