//! HTTP API handlers.

use axum::{http::Uri, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;

/// Service identifier reported by the health endpoint.
pub const SERVICE_NAME: &str = "whatsapp-api-middleware";

/// Crate version, reported by the root endpoint and the OpenAPI document.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Greeting returned by the root endpoint.
pub const GREETING: &str = "Hello World from WhatsApp API Middleware!";

/// Root response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct RootResponse {
    /// Greeting message.
    #[schema(value_type = String, example = "Hello World from WhatsApp API Middleware!")]
    pub message: &'static str,
    /// Service status: "running".
    #[schema(value_type = String, example = "running")]
    pub status: &'static str,
    /// Service version.
    #[schema(value_type = String, example = "0.1.1")]
    pub version: &'static str,
}

/// Health check response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "healthy".
    #[schema(value_type = String, example = "healthy")]
    pub status: &'static str,
    /// Service identifier.
    #[schema(value_type = String, example = "whatsapp-api-middleware")]
    pub service: &'static str,
}

pub const ROOT_PAYLOAD: RootResponse = RootResponse {
    message: GREETING,
    status: "running",
    version: VERSION,
};

pub const HEALTH_PAYLOAD: HealthResponse = HealthResponse {
    status: "healthy",
    service: SERVICE_NAME,
};

/// Root endpoint.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service greeting", body = RootResponse)
    ),
    tag = "General"
)]
pub async fn root() -> Json<RootResponse> {
    Json(ROOT_PAYLOAD)
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HEALTH_PAYLOAD)
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "no route matched");
    ApiError::NotFound
}

/// Fallback for a known path requested with an unrouted method.
pub async fn method_not_allowed() -> impl IntoResponse {
    ApiError::MethodNotAllowed
}
