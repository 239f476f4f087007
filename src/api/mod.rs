//! HTTP API module for the root, health, and documentation endpoints.

pub mod docs;
pub mod handlers;
pub mod routes;

pub use docs::ApiDoc;
pub use routes::create_router;
