/**
 * Authentication Middleware
 *
 * This module guards protected operations behind a valid bearer token. It
 * extracts the token from the `Authorization` header, validates it with the
 * `TokenService`, and only then runs the wrapped operation.
 *
 * # Header Contract
 *
 * Exactly one `Authorization` header whose value is `Bearer <token>`. Any
 * other scheme, several headers, or a value with extra whitespace-separated
 * parts is treated as if the header were absent.
 *
 * # Responses
 *
 * Every rejection (missing header, malformed, bad signature, expired) is the
 * same 401 "Unauthorized". Which check failed is only logged.
 *
 * The guard never alters the token and adds nothing to the request: the
 * wrapped operation learns only that the request was authenticated.
 */

use std::future::Future;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::backend::auth::sessions::{Claims, TokenService};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the bearer token from request headers
///
/// Returns `None` unless there is exactly one `Authorization` header of the
/// form `Bearer <token>` with a single non-empty token.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let mut values = headers.get_all(AUTHORIZATION).iter();
    let value = values.next()?;
    if values.next().is_some() {
        tracing::warn!("Multiple Authorization headers");
        return None;
    }

    let value = value.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?;
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }

    Some(token)
}

/// Check the request headers for a valid, unexpired, correctly signed token
pub fn authorize(tokens: &TokenService, headers: &HeaderMap) -> Result<Claims, BackendError> {
    let token = extract_bearer(headers).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        BackendError::Unauthorized
    })?;

    tokens.validate(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::Unauthorized
    })
}

/// Run `operation` only if the request carries a valid token
///
/// The operation's output is returned unchanged.
pub async fn protect<F, Fut, T>(
    tokens: &TokenService,
    headers: &HeaderMap,
    operation: F,
) -> Result<T, BackendError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    authorize(tokens, headers)?;
    Ok(operation().await)
}

/// Axum layer form of [`protect`]
///
/// ```rust,ignore
/// Router::new()
///     .route("/protected", get(handler))
///     .route_layer(axum::middleware::from_fn_with_state(state, auth_middleware))
/// ```
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let headers = request.headers().clone();
    protect(app_state.auth.tokens(), &headers, || next.run(request))
        .await
        .unwrap_or_else(|e| e.into_response())
}
