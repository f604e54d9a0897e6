//! Directory server entry point

use anyhow::Context;
use axum::{extract::Request, ServiceExt};
use carefind::{
    api::create_router,
    config::{Config, StorageBackend, DEFAULT_CONFIG_FILE},
    logging,
    state::AppState,
};
use clap::Parser;
use std::path::PathBuf;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

#[derive(Debug, Parser)]
#[clap(name = "directory-server", version, about = "Hospital directory server")]
struct Args {
    /// Configuration file (TOML)
    #[clap(long, short, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Use the in-memory store instead of PostgreSQL
    #[clap(long)]
    memory: bool,

    /// Seed the in-memory store with demo data (implies --memory)
    #[clap(long)]
    seed_demo: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if self.memory || self.seed_demo {
            config.storage.backend = StorageBackend::Memory;
        }
        if self.seed_demo {
            config.storage.seed_demo_data = true;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load_from(&args.config).context("Failed to load configuration")?;
    args.apply(&mut config);

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    let _telemetry_guard =
        logging::init_logging(&config.logging).context("Failed to initialize logging/telemetry")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.logging.deployment_environment,
        backend = ?config.storage.backend,
        admin_gate = config.auth.admin_enabled,
        "Starting directory server"
    );

    let addr = config
        .socket_addr()
        .context("Failed to determine socket address")?;

    let state = AppState::new(config)
        .await
        .context("Failed to initialize application state")?;

    // Trailing slashes are trimmed before routing.
    let app = NormalizePathLayer::trim_trailing_slash().layer(create_router(state));

    tracing::info!("Directory server listening on http://{}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener on {addr}"))?;

    if let Err(e) = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server terminated unexpectedly");
        return Err(e.into());
    }

    // Telemetry is flushed when `_telemetry_guard` drops.
    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Wait for SIGTERM (containers) or SIGINT (Ctrl+C)
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let sigint = tokio::signal::ctrl_c();
    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                _ = sigint => tracing::info!("SIGINT received, starting graceful shutdown..."),
                _ = sigterm.recv() => tracing::info!("SIGTERM received, starting graceful shutdown..."),
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install SIGTERM handler; waiting for SIGINT only");
            if sigint.await.is_ok() {
                tracing::info!("SIGINT received, starting graceful shutdown...");
            }
        }
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    }
}
