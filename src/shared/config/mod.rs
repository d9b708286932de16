//! Application configuration module
//!
//! Provides the process-wide configuration for the gateway. The signing
//! secret lives here and is handed to the token service at construction; it is
//! never read from a global afterwards.

use std::time::Duration;

use thiserror::Error;

/// Default token lifetime (one hour)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 60 * 60;

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Symmetric key used to sign and verify tokens
    pub jwt_secret: Vec<u8>,
    /// Lifetime of tokens issued at login
    pub token_ttl: Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Port the HTTP server listens on
    pub server_port: u16,
    /// PostgreSQL connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("server_port", &self.server_port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// | Variable         | Required | Default              |
    /// |------------------|----------|----------------------|
    /// | `JWT_SECRET`     | yes      |                      |
    /// | `TOKEN_TTL_SECS` | no       | 3600                 |
    /// | `BCRYPT_COST`    | no       | `bcrypt::DEFAULT_COST` |
    /// | `SERVER_PORT`    | no       | 3000                 |
    /// | `DATABASE_URL`   | no       | in-memory store      |
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Some(secret) = read_var("JWT_SECRET") {
            builder = builder.jwt_secret(secret.into_bytes());
        }
        if let Some(ttl) = read_var("TOKEN_TTL_SECS") {
            let secs = ttl
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue("TOKEN_TTL_SECS", ttl))?;
            builder = builder.token_ttl(Duration::from_secs(secs));
        }
        if let Some(cost) = read_var("BCRYPT_COST") {
            let parsed = cost
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue("BCRYPT_COST", cost))?;
            builder = builder.bcrypt_cost(parsed);
        }
        if let Some(port) = read_var("SERVER_PORT") {
            let parsed = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT", port))?;
            builder = builder.server_port(parsed);
        }
        if let Some(url) = read_var("DATABASE_URL") {
            builder = builder.database_url(url);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue("TOKEN_TTL_SECS", "0".to_string()));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue(
                "BCRYPT_COST",
                self.bcrypt_cost.to_string(),
            ));
        }
        Ok(())
    }
}

/// Treats unset and blank variables the same way
fn read_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<Vec<u8>>,
    token_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
    server_port: Option<u16>,
    database_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<Vec<u8>>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the server port
    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            token_ttl: self
                .token_ttl
                .unwrap_or(Duration::from_secs(DEFAULT_TOKEN_TTL_SECS)),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
            server_port: self.server_port.unwrap_or(DEFAULT_SERVER_PORT),
            database_url: self.database_url,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1:?}")]
    InvalidValue(&'static str, String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
