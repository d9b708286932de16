/**
 * Registration and Login Flow
 *
 * `AuthService` drives the two authentication flows against any `UserStore`.
 * Each call is independent; nothing is kept between calls.
 *
 * # Registration
 *
 * 1. Validate input (both fields non-empty)
 * 2. Check the username is not taken
 * 3. Hash the password
 * 4. Persist the credential
 *
 * No token is issued at registration.
 *
 * # Login
 *
 * 1. Validate input
 * 2. Fetch the stored credential
 * 3. Verify the password
 * 4. Issue a token
 *
 * # Security
 *
 * - An unknown user, a store failure and a wrong password all produce the
 *   same `AuthFailed`, so login cannot be used to enumerate usernames
 * - Unknown users still pay for a bcrypt verification
 * - Passwords and tokens are never logged
 */

use std::sync::Arc;
use std::time::Duration;

use crate::backend::auth::handlers::types::{LoginRequest, RegistrationRequest};
use crate::backend::auth::password::PasswordCodec;
use crate::backend::auth::sessions::{IssuedToken, TokenService};
use crate::backend::error::BackendError;
use crate::backend::store::{Credential, StoreError, UserStore};

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    codec: PasswordCodec,
    tokens: Arc<TokenService>,
    token_ttl: Duration,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn UserStore>,
        codec: PasswordCodec,
        tokens: Arc<TokenService>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            store,
            codec,
            tokens,
            token_ttl,
        }
    }

    pub fn tokens(&self) -> &Arc<TokenService> {
        &self.tokens
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - empty username or password
    /// * `Conflict` - username already registered
    /// * `StoreUnavailable` - the store failed during lookup or insert
    /// * `InternalError` - hashing failed
    pub async fn register(&self, request: RegistrationRequest) -> Result<(), BackendError> {
        request.validate().map_err(|e| {
            tracing::warn!("Rejected registration input: {}", e);
            BackendError::from(e)
        })?;

        let exists = self.store.exists(&request.username).await.map_err(|e| {
            tracing::error!("Failed to check if user exists: {}", e);
            BackendError::StoreUnavailable
        })?;
        if exists {
            tracing::warn!("Username already exists: {}", request.username);
            return Err(BackendError::Conflict);
        }

        let codec = self.codec;
        let password = request.password;
        let password_hash = tokio::task::spawn_blocking(move || codec.hash(&password))
            .await
            .map_err(|e| {
                tracing::error!("Password hashing task failed: {}", e);
                BackendError::InternalError
            })?
            .map_err(|e| {
                tracing::error!("Failed to hash password: {}", e);
                BackendError::InternalError
            })?;

        let credential = Credential::new(request.username, password_hash);
        let username = credential.username.clone();
        match self.store.put(credential).await {
            Ok(()) => {
                tracing::info!("User registered: {}", username);
                Ok(())
            }
            Err(StoreError::Duplicate) => {
                tracing::warn!("Username registered concurrently: {}", username);
                Err(BackendError::Conflict)
            }
            Err(e) => {
                tracing::error!("Failed to insert user: {}", e);
                Err(BackendError::StoreUnavailable)
            }
        }
    }

    /// Authenticate a user and issue a token
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - empty username or password
    /// * `AuthFailed` - unknown user, store failure or wrong password
    /// * `InternalError` - verification or token issuance failed
    pub async fn login(&self, request: LoginRequest) -> Result<IssuedToken, BackendError> {
        request.validate().map_err(|e| {
            tracing::warn!("Rejected login input: {}", e);
            BackendError::from(e)
        })?;

        let stored = match self.store.get(&request.username).await {
            Ok(credential) => Some(credential),
            Err(StoreError::NotFound) => {
                tracing::warn!("Login for unknown user: {}", request.username);
                None
            }
            Err(e) => {
                tracing::error!("Failed to fetch user {}: {}", request.username, e);
                None
            }
        };

        let codec = self.codec;
        let password = request.password;
        let stored_hash = stored.map(|credential| credential.password_hash);
        let user_known = stored_hash.is_some();
        let matches = tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => codec.verify(&hash, &password),
            None => codec.verify_dummy(&password),
        })
        .await
        .map_err(|e| {
            tracing::error!("Password verification task failed: {}", e);
            BackendError::InternalError
        })?;

        if !user_known {
            return Err(BackendError::AuthFailed);
        }
        if !matches {
            tracing::warn!("Invalid password for user: {}", request.username);
            return Err(BackendError::AuthFailed);
        }

        let issued = self
            .tokens
            .issue(&request.username, self.token_ttl)
            .map_err(|e| {
                tracing::error!("Failed to create token: {}", e);
                BackendError::InternalError
            })?;

        tracing::info!("User logged in: {}", request.username);
        Ok(issued)
    }
}
