//! Common test utilities and helpers
//!
//! Builds the application around an in-memory store with a cheap bcrypt
//! cost so integration tests run quickly.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use authgate::backend::server::create_app_with_store;
use authgate::backend::store::InMemoryUserStore;
use authgate::shared::AppConfig;

pub const TEST_SECRET: &[u8] = b"integration-test-secret";

pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .token_ttl(Duration::from_secs(60))
        .bcrypt_cost(4)
        .build()
        .expect("valid test configuration")
}

/// Test server plus a handle on its store
pub struct TestApp {
    pub server: TestServer,
    pub store: InMemoryUserStore,
}

pub fn create_test_app() -> TestApp {
    let store = InMemoryUserStore::new();
    let app = create_app_with_store(&test_config(), Arc::new(store.clone()));
    TestApp {
        server: TestServer::new(app).expect("failed to start test server"),
        store,
    }
}

pub fn credentials(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "username": username, "password": password })
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
