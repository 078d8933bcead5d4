//! # Fuel API
//!
//! HTTP server for the vehicle fuel ledger.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Fuel API Server                                │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► Services ───► In-memory store            │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                            OdometerLedger                               │
//! │                       (tank-excluded | all-fuel)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Context;
use fuel_api::{build_router, AppState, ServerConfig};
use fuel_store::Store;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fuel_api=debug,fuel_store=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Fuel API");

    // Load configuration
    let config = ServerConfig::load().context("Invalid server configuration")?;
    info!(
        host = %config.host,
        port = config.port,
        policy = %config.policy,
        "Configuration loaded"
    );

    // Create shared state
    let state = AppState::new(Store::new(), config.policy);
    let app = build_router(state, &config.cors_origins);

    // Start server
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, "Listening for HTTP requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(?e, "Failed to install Ctrl+C handler");
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
                warn!(?e, "Failed to install SIGTERM handler");
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
