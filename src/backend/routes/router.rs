/**
 * Router Configuration
 *
 * Combines all routes into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (register, login, protected)
 * 2. Request tracing layer
 * 3. Fallback handler (404)
 */

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") });

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{header::AUTHORIZATION, Method, Request};
    use tower::ServiceExt;

    use crate::backend::auth::flow::AuthService;
    use crate::backend::auth::password::PasswordCodec;
    use crate::backend::auth::sessions::TokenService;
    use crate::backend::store::InMemoryUserStore;

    fn router_with(tokens: Arc<TokenService>) -> Router<()> {
        let auth = AuthService::new(
            Arc::new(InMemoryUserStore::new()),
            PasswordCodec::new(4),
            tokens,
            Duration::from_secs(60),
        );
        create_router(AppState::new(auth))
    }

    fn request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back() {
        let tokens = Arc::new(TokenService::new(b"router-test-secret"));
        let response = router_with(tokens)
            .oneshot(request(Method::GET, "/nowhere"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_protected_route_is_guarded() {
        let tokens = Arc::new(TokenService::new(b"router-test-secret"));
        let app = router_with(tokens.clone());

        let anonymous = app
            .clone()
            .oneshot(request(Method::GET, "/protected"))
            .await
            .unwrap();
        assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

        let issued = tokens.issue("alice", Duration::from_secs(60)).unwrap();
        let mut authorized = request(Method::GET, "/protected");
        authorized.headers_mut().insert(
            AUTHORIZATION,
            format!("Bearer {}", issued.token).parse().unwrap(),
        );
        let response = app.oneshot(authorized).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_register_requires_post() {
        let tokens = Arc::new(TokenService::new(b"router-test-secret"));
        let response = router_with(tokens)
            .oneshot(request(Method::GET, "/register"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
