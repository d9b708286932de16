//! User Store Module
//!
//! This module defines the narrow capability the authentication flow needs
//! from persistence, plus two implementations of it.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs       - `UserStore` trait, `Credential`, `StoreError`
//! ├── memory.rs    - In-memory store (tests, database-less development)
//! └── postgres.rs  - PostgreSQL store (production)
//! ```
//!
//! # Consistency
//!
//! Uniqueness between `exists` and `put` is the store's responsibility. Both
//! implementations refuse to overwrite an existing username in `put` and
//! report `StoreError::Duplicate` instead, so a lost check-then-act race
//! surfaces as a conflict rather than a silent overwrite.

use async_trait::async_trait;
use thiserror::Error;

/// In-memory store
pub mod memory;

/// PostgreSQL store
pub mod postgres;

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;

/// A persisted username and password hash
///
/// The hash is produced by `PasswordCodec` and is never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password_hash: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// No credential is stored under the requested username
    #[error("user not found")]
    NotFound,

    /// A credential already exists under this username
    #[error("user already exists")]
    Duplicate,

    /// The backing store failed
    #[error("store backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Duplicate,
            _ => Self::Backend(err.to_string()),
        }
    }
}

/// Credential persistence keyed by username
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Whether a credential is stored under `username`
    async fn exists(&self, username: &str) -> Result<bool, StoreError>;

    /// Persist a new credential; never overwrites an existing one
    async fn put(&self, credential: Credential) -> Result<(), StoreError>;

    /// Fetch the credential stored under `username`
    async fn get(&self, username: &str) -> Result<Credential, StoreError>;
}
