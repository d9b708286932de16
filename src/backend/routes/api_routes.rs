/**
 * API Route Handlers
 *
 * # Routes
 *
 * - `POST /register` - User registration (public)
 * - `POST /login` - User login (public)
 * - `GET /protected` - Protected resource (requires `Authorization: Bearer <token>`)
 */

use axum::{middleware::from_fn_with_state, routing, Router};

use crate::backend::auth::{login, protected, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// The bearer-token guard is attached with `route_layer` to the protected
/// route only, so unknown paths still reach the 404 fallback.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .route("/protected", routing::get(protected))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router
        .route("/register", routing::post(register))
        .route("/login", routing::post(login))
        .merge(protected_routes)
}
