use anyhow::Context;
use std::net::SocketAddr;
use tracing::{info, warn};

use promocode_factory_api::config::ApiConfig;
use promocode_factory_api::{middleware, routes};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("failed to read configuration")?;

    middleware::init_tracing(config.json_logs);
    info!("Application starting...");

    let app_state = routes::create_app_state_with_storage(&config)
        .await
        .context("failed to initialize storage")?;
    if app_state.is_postgres() {
        info!("Using PostgreSQL storage");
    } else {
        info!("Using in-memory storage (set DATABASE_URL to enable PostgreSQL)");
    }

    let app = routes::create_app(app_state, &config.cors_allowed_origins);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind listener to {}", addr))?;
    info!("Server listening on {} (port {})", addr, config.port);
    info!("Health check available at http://{}/health", addr);
    info!("OpenAPI document available at http://{}/api/v1/openapi.json", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

// Handle both SIGINT (Ctrl+C) and SIGTERM (Docker stop)
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            warn!("Failed to install SIGTERM handler: {}", e);
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("SIGINT received, shutting down gracefully");
            }
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("SIGINT received, shutting down gracefully");
        }
        _ = sigterm.recv() => {
            info!("SIGTERM received, shutting down gracefully");
        }
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
