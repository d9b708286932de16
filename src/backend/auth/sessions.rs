/**
 * Session Tokens
 *
 * This module issues and validates the signed, time-bounded tokens handed out
 * at login. Tokens are compact HS256 JWTs carrying the username (`sub`), the
 * issue time (`iat`) and the absolute expiry (`exp`).
 *
 * The service holds no per-token state: validity is derived purely from the
 * signature and the embedded expiry, so any instance holding the same secret
 * can verify any token.
 */

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Decoded token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to
    pub sub: String,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
    /// Issued at time (Unix timestamp, seconds)
    pub iat: i64,
    /// Unique token id
    pub jti: String,
}

impl Claims {
    pub fn subject(&self) -> &str {
        &self.sub
    }

    pub fn expires_at(&self) -> i64 {
        self.exp
    }
}

/// A freshly signed token together with its absolute expiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: i64,
}

/// Why a token was rejected (or could not be produced)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token could not be decoded or parsed
    #[error("malformed token")]
    Malformed,

    /// The signature does not match the payload
    #[error("invalid token signature")]
    BadSignature,

    /// The embedded expiry is in the past
    #[error("token has expired")]
    Expired,

    /// Signing failed while issuing a token
    #[error("failed to encode token: {0}")]
    Encoding(String),
}

/// Stateless HS256 token issuer and validator
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

impl TokenService {
    /// Build a token service around a symmetric secret
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an explicit clock in `validate_at`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a token for `subject` that expires `ttl` from now
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<IssuedToken, TokenError> {
        self.issue_at(subject, ttl, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(
        &self,
        subject: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let issued_at = now.timestamp();
        let ttl_secs = i64::try_from(ttl.as_secs())
            .map_err(|_| TokenError::Encoding("ttl out of range".to_string()))?;
        let expires_at = issued_at
            .checked_add(ttl_secs)
            .ok_or_else(|| TokenError::Encoding("ttl out of range".to_string()))?;

        let claims = Claims {
            sub: subject.to_string(),
            exp: expires_at,
            iat: issued_at,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify a token and return its claims
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`
    ///
    /// The token is valid while `now <= exp`.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(map_jwt_error)?;

        if now.timestamp() > data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

/// Collapse jsonwebtoken's error kinds onto the three rejection reasons
fn map_jwt_error(error: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match error.kind() {
        ErrorKind::InvalidSignature => TokenError::BadSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    }
}
