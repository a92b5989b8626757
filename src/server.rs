// src/server.rs

use std::future::Future;
use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::routes::create_router;
use crate::AppState;

pub async fn bind(addr: SocketAddr) -> anyhow::Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))
}

/// Serve on an already bound listener until `shutdown` resolves, then wait
/// for open connections to finish.
pub async fn serve<S>(listener: TcpListener, state: AppState, shutdown: S) -> anyhow::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("listening on http://{addr}");
    }

    axum::serve(listener, create_router(state).into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    tracing::info!("shutdown complete");
    Ok(())
}

/// Bind `config.bind_addr()` and serve. A bind failure is returned before any
/// request is accepted.
pub async fn run<S>(config: AppConfig, shutdown: S) -> anyhow::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    let listener = bind(config.bind_addr()).await?;
    serve(listener, AppState::new(config), shutdown).await
}
