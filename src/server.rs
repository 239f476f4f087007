//! HTTP server startup.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::create_router;
use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::utils::shutdown_signal;

/// Bind a listener on the configured host and port.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.socket_addr().map_err(ServiceError::InvalidConfig)?;
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Serve `router` on `listener` until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("HTTP server stopped");
    Ok(())
}

/// Bind, build the router, and serve until Ctrl+C or SIGTERM.
pub async fn run(config: &Config) -> Result<()> {
    let listener = bind(config).await?;
    serve(listener, create_router(), shutdown_signal()).await
}
