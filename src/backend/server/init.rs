/**
 * Server Initialization
 *
 * Wires configuration, the user store, the password codec and the token
 * service into an `AppState`, then builds the router.
 *
 * # Initialization Process
 *
 * 1. Build the user store (PostgreSQL or in-memory)
 * 2. Build the token service from the configured secret
 * 3. Create the authentication service and app state
 * 4. Create the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::flow::AuthService;
use crate::backend::auth::password::PasswordCodec;
use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::backend::store::{StoreError, UserStore};
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails only when a configured database cannot be reached or migrated.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing authgate server");

    let store = load_store(config).await?;
    Ok(create_app_with_store(config, store))
}

/// Create the application around an already constructed store
pub fn create_app_with_store(config: &AppConfig, store: Arc<dyn UserStore>) -> Router<()> {
    let tokens = Arc::new(TokenService::new(&config.jwt_secret));
    let codec = PasswordCodec::new(config.bcrypt_cost);
    let auth = AuthService::new(store, codec, tokens, config.token_ttl);

    let app = create_router(AppState::new(auth));
    tracing::info!(
        "Router configured (token ttl {}s, bcrypt cost {})",
        config.token_ttl.as_secs(),
        config.bcrypt_cost
    );

    app
}
