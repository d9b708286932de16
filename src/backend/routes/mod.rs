//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Main router creation
//! └── api_routes.rs  - Authentication and protected routes
//! ```
//!
//! Routing by path is transport plumbing only; all authentication decisions
//! are made in `backend::auth` and `backend::middleware`.

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
