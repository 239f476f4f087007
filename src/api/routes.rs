//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::docs::{redoc, swagger_ui};
use super::handlers::{health, method_not_allowed, not_found, root};
use crate::metrics::track_requests;

/// Create the API router.
pub fn create_router() -> Router {
    let api = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route_layer(middleware::from_fn(track_requests));

    api.merge(swagger_ui())
        .merge(redoc())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
}
