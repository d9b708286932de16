/**
 * Protected Resource Handler
 *
 * The resource behind the bearer-token guard. It receives nothing from the
 * guard beyond the fact that it was allowed to run.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::MessageResponse;

/// Protected handler (GET /protected)
pub async fn protected() -> Json<MessageResponse> {
    Json(MessageResponse::new("Protected"))
}
