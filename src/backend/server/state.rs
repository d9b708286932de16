/**
 * Application State Management
 *
 * `AppState` is the state handed to the Axum router. It holds the
 * authentication service, which in turn owns the user store, the password
 * codec and the token service. Everything inside is immutable or internally
 * synchronised, so cloning the state per request is cheap and safe.
 *
 * The `FromRef` implementation lets handlers extract `AuthService` directly.
 */

use axum::extract::FromRef;

use crate::backend::auth::flow::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
}

impl AppState {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
