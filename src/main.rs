// src/main.rs

use tracing_subscriber::EnvFilter;

use rollouts_demo::config::AppConfig;
use rollouts_demo::server;
use rollouts_demo::shutdown::shutdown_signal;

const DEFAULT_LOG_FILTER: &str = "rollouts_demo=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present (may carry RUST_LOG)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = AppConfig::from_env()
        .inspect_err(|e| tracing::error!("invalid configuration: {e:#}"))?;
    tracing::info!(version = %config.version, "resolved app version");

    server::run(config, shutdown_signal())
        .await
        .inspect_err(|e| tracing::error!("server exited with an error: {e:#}"))
}
