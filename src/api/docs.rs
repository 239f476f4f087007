//! OpenAPI document, Swagger UI, and ReDoc.

use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, HealthResponse, RootResponse};

/// Path of the interactive documentation page.
pub const DOCS_PATH: &str = "/docs";

/// Path of the OpenAPI JSON document.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Path of the ReDoc reference page.
pub const REDOC_PATH: &str = "/redoc";

/// OpenAPI description of the service. Version comes from the crate version.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "WhatsApp API Middleware",
        description = "API middleware para notificaciones WhatsApp"
    ),
    paths(handlers::root, handlers::health),
    components(schemas(RootResponse, HealthResponse)),
    tags(
        (name = "General", description = "Service information"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// Swagger UI serving [`ApiDoc`] at [`DOCS_PATH`] and [`OPENAPI_PATH`].
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi())
}

/// ReDoc page rendering [`ApiDoc`] at [`REDOC_PATH`].
pub fn redoc() -> Redoc<utoipa::openapi::OpenApi> {
    Redoc::with_url(REDOC_PATH, ApiDoc::openapi())
}

/// Render the OpenAPI document as pretty-printed JSON.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}
