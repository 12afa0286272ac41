//! HTTP server initialization and runtime setup.
//!
//! Handles database setup, router construction, and the Axum serve loop.

use std::net::SocketAddr;

use anyhow::Result;

use crate::config::Config;
use crate::db;
use crate::routes::app_router;
use crate::service::LinkService;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (file created on first run)
/// - Idempotent `urls` table bootstrap
/// - Axum HTTP server with graceful Ctrl-C shutdown
///
/// # Errors
///
/// Returns an error if the database cannot be opened, the schema cannot be
/// created, or the listener fails to bind. The process must not serve
/// requests in a half-initialized state.
pub async fn run(config: Config) -> Result<()> {
    let pool = db::connect(&config.database_url, config.db_max_connections).await?;
    tracing::info!("Connected to database");

    db::init_schema(&pool).await?;

    let state = AppState::new(LinkService::new(pool), config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
