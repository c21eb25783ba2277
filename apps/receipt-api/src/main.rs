//! # Receipt API
//!
//! HTTP server that turns receipts into loyalty points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Receipt API Server                               │
//! │                                                                         │
//! │  Client ───► HTTP (3000) ───► receipt-core ───► In-memory store        │
//! │                               validate + score    id → points           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use receipt_api::{build_app, AppState, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Receipt API server...");

    // Load configuration
    let config = ServerConfig::load().context("failed to load configuration")?;
    info!(
        host = %config.host,
        port = config.port,
        max_body_bytes = config.max_body_bytes,
        workers = ?config.workers,
        "Configuration loaded"
    );

    // Create shared state
    let state = web::Data::new(AppState::new(config.clone()));

    let mut server = HttpServer::new(move || build_app(state.clone())).disable_signals();
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server
        .bind((config.host.as_str(), config.port))
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
        .run();

    info!(host = %config.host, port = config.port, "Server is running");

    // Stop gracefully on Ctrl+C / SIGTERM
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        shutdown_signal().await;
        handle.stop(true).await;
    });

    server.await.context("server terminated with an error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
