//! Server startup helper for the binary.
//!
//! Provides [`spawn_server`], which binds the listener eagerly and then
//! serves on a background Tokio task, so bind failures surface to the
//! caller instead of only being logged.

use std::net::SocketAddr;
use std::sync::Arc;

use pokedex_client::CatalogSource;
use pokedex_core::config::ServerSettings;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::server::{ServerError, bind_address, serve};
use crate::state::AppState;

/// Errors that can occur when spawning the server.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The server failed to bind or start.
    #[error("server start error: {0}")]
    Server(#[from] ServerError),
}

/// Bind the configured address and serve on a background task.
///
/// Returns the bound address (useful with port 0) and the task handle.
/// The task runs until the runtime shuts down or the handle is aborted.
///
/// # Errors
///
/// Returns [`StartupError::Server`] if the address is invalid or the
/// listener cannot bind.
pub async fn spawn_server<S: CatalogSource + 'static>(
    settings: &ServerSettings,
    state: Arc<AppState<S>>,
) -> Result<(SocketAddr, JoinHandle<()>), StartupError> {
    let addr = bind_address(settings)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;
    let local = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("listener has no address: {e}")))?;

    let handle = tokio::spawn(async move {
        if let Err(e) = serve(listener, state).await {
            tracing::error!(error = %e, "Catalog server exited with error");
        }
    });

    tracing::info!(%local, "Catalog server spawned on background task");

    Ok((local, handle))
}
