//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health, info, not_found, welcome, AppState};
use super::middleware::json_body_layer;

/// Create the API router.
///
/// Unknown paths and unsupported methods on known paths both answer 404.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health).fallback(not_found))
        .route("/", get(welcome).fallback(not_found))
        .route("/api/info", get(info).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(json_body_layer))
        .layer(TraceLayer::new_for_http())
}
