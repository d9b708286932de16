/**
 * PostgreSQL User Store
 *
 * Credentials live in the `users` table (see `migrations/`), keyed by
 * username. The primary key enforces uniqueness, so a `put` that loses a
 * registration race fails with `StoreError::Duplicate`.
 */

use async_trait::async_trait;
use sqlx::PgPool;

use super::{Credential, StoreError, UserStore};

#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and apply pending migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn exists(&self, username: &str) -> Result<bool, StoreError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn put(&self, credential: Credential) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO users (username, password_hash) VALUES ($1, $2)")
            .bind(&credential.username)
            .bind(&credential.password_hash)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get(&self, username: &str) -> Result<Credential, StoreError> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT username, password_hash FROM users WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|(username, password_hash)| Credential {
            username,
            password_hash,
        })
        .ok_or(StoreError::NotFound)
    }
}
