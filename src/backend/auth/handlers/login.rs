/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Security
 *
 * - Unknown user and wrong password both return 401 "Invalid credentials"
 * - The token appears only in the response body, never in logs
 */

use axum::{body::Bytes, extract::State, response::Json};

use crate::backend::auth::flow::AuthService;
use crate::backend::auth::handlers::parse_json;
use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::error::BackendError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - body is not valid JSON or a field is empty
/// * `401 Unauthorized` - unknown user or wrong password
/// * `500 Internal Server Error` - token issuance failed
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "expires_at": 1700003600
/// }
/// ```
pub async fn login(
    State(auth): State<AuthService>,
    body: Bytes,
) -> Result<Json<TokenResponse>, BackendError> {
    let request: LoginRequest = parse_json(&body)?;
    tracing::info!("Login request for: {}", request.username);

    let issued = auth.login(request).await?;

    Ok(Json(TokenResponse {
        token: issued.token,
        expires_at: issued.expires_at,
    }))
}
