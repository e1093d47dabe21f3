//! HTTP server setup
//!
//! Builds the store from configuration, binds the listener and serves the
//! router until Ctrl+C or SIGTERM.

use album_common::{Error, Result, ServiceConfig};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::{build_router, AlbumStore, AppState};

/// Run HTTP API server
///
/// A bind failure is logged and returned; the caller treats it as fatal.
pub async fn run(config: &ServiceConfig) -> Result<()> {
    let store = if config.seed {
        AlbumStore::seeded()
    } else {
        AlbumStore::empty()
    };
    info!("Album store initialized with {} albums", store.len().await);

    let app = build_router(AppState::new(store));

    let addr = config.bind_addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return Err(Error::Http(format!("Failed to bind to {}: {}", addr, e)));
        }
    };
    info!("album-service listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Http(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
