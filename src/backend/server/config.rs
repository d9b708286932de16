/**
 * Server Configuration
 *
 * Turns an `AppConfig` into the runtime collaborators the server needs.
 *
 * # Store Selection
 *
 * With `DATABASE_URL` set, credentials are kept in PostgreSQL and a failure
 * to connect or migrate aborts startup. Without it the server falls back to
 * an in-memory store, which loses every account on restart.
 */

use std::sync::Arc;

use crate::backend::store::{InMemoryUserStore, PgUserStore, StoreError, UserStore};
use crate::shared::AppConfig;

/// Build the user store selected by the configuration
pub async fn load_store(config: &AppConfig) -> Result<Arc<dyn UserStore>, StoreError> {
    match &config.database_url {
        Some(url) => {
            let store = PgUserStore::connect(url).await.map_err(|e| {
                tracing::error!("Failed to initialise database store: {}", e);
                e
            })?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using in-memory user store; accounts will not survive a restart.");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
    }
}
