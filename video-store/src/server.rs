//! HTTP server lifecycle.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::ServiceConfig;
use crate::presentation::{create_router, AppState};

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
pub async fn run(config: ServiceConfig) -> Result<()> {
    let state = Arc::new(AppState::new(&config));
    let app = create_router(state);

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind to {}", config.listen))?;

    tracing::info!(addr = %config.listen, seeded = config.seed_demo_data, "video store listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("video store stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        },
        () = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        },
    }
}
