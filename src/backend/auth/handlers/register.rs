/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Decode the JSON body
 * 2. Hand the request to `AuthService::register`
 * 3. Return 201 Created
 *
 * No token is returned; clients log in separately.
 */

use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};

use crate::backend::auth::flow::AuthService;
use crate::backend::auth::handlers::parse_json;
use crate::backend::auth::handlers::types::{MessageResponse, RegistrationRequest};
use crate::backend::error::BackendError;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - body is not valid JSON or a field is empty
/// * `409 Conflict` - username already registered
/// * `503 Service Unavailable` - user store failed
/// * `500 Internal Server Error` - password hashing failed
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "password": "secret123"}
/// ```
pub async fn register(
    State(auth): State<AuthService>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    let request: RegistrationRequest = parse_json(&body)?;
    tracing::info!("Register request for username: {}", request.username);

    auth.register(request).await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new("User registered"))))
}
