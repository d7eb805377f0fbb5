//! Server runner.

use std::net::SocketAddr;

use crate::app::{app, AppState};

/// Bind and serve the relay until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("gongke-api listening on {addr}");
    axum::serve(listener, app(state)).await
}
