//! HTTP server initialization and runtime setup.
//!
//! Builds the seeded in-memory repositories, assembles application state,
//! and runs the Axum server.

use crate::config::Config;
use crate::infrastructure::persistence::{MemoryRepository, seed};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - One seeded in-memory repository per resource type
/// - Axum HTTP server with graceful shutdown on ctrl-c
///
/// All collection state is lost when the process exits.
///
/// # Errors
///
/// Returns an error if the server fails to bind or a runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let state = AppState {
        users: Arc::new(MemoryRepository::with_seed(seed::users())),
        cars: Arc::new(MemoryRepository::with_seed(seed::cars())),
        products: Arc::new(MemoryRepository::with_seed(seed::products())),
        orders: Arc::new(MemoryRepository::with_seed(seed::orders())),
    };
    tracing::info!("Collections seeded (3 records per resource)");

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
