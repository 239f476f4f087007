//! WhatsApp API middleware.
//!
//! A small HTTP service exposing a greeting and a health check, with an
//! OpenAPI description of both.
//!
//! ```text
//! GET /        -> {"message":"Hello World from WhatsApp API Middleware!","status":"running","version":"0.1.1"}
//! GET /health  -> {"status":"healthy","service":"whatsapp-api-middleware"}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP handlers, routes, and OpenAPI docs
//! - [`metrics`]: Request metrics
//! - [`server`]: Listener binding and graceful serving
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
