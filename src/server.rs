//! Listener binding and the serve loop.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::error::{AppError, Result};

/// Bind the listening socket on all interfaces.
///
/// Port `0` asks the OS for an ephemeral port.
pub async fn bind(port: u16) -> Result<TcpListener> {
    bind_addr(SocketAddr::from(([0, 0, 0, 0], port))).await
}

/// Bind the listening socket on an explicit address.
pub async fn bind_addr(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// In-flight requests are drained before this returns.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = create_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
