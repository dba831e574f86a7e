//! HTTP server lifecycle management.
//!
//! Provides [`start_server`], which binds to a TCP port and serves the
//! router until the task is aborted or the server fails.

use std::net::SocketAddr;
use std::sync::Arc;

use pokedex_client::CatalogSource;
use pokedex_core::config::ServerSettings;
use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Parse the configured bind address.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if host and port do not form a socket
/// address.
pub fn bind_address(settings: &ServerSettings) -> Result<SocketAddr, ServerError> {
    format!("{}:{}", settings.host, settings.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))
}

/// Start the HTTP server.
///
/// Binds to the configured address, builds the router, and serves
/// requests until the process is terminated.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind or the server
/// encounters a fatal I/O error.
pub async fn start_server<S: CatalogSource + 'static>(
    settings: &ServerSettings,
    state: Arc<AppState<S>>,
) -> Result<(), ServerError> {
    let addr = bind_address(settings)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;
    serve(listener, state).await
}

/// Serve the router on an already bound listener.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] if the server encounters a fatal I/O
/// error.
pub async fn serve<S: CatalogSource + 'static>(
    listener: TcpListener,
    state: Arc<AppState<S>>,
) -> Result<(), ServerError> {
    let addr = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("listener has no address: {e}")))?;
    info!(%addr, "Catalog server listening");

    axum::serve(listener, build_router(state))
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))
}

/// Errors that can occur when starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_from_settings() {
        let settings = ServerSettings {
            host: "127.0.0.1".to_owned(),
            port: 9000,
        };
        assert_eq!(
            bind_address(&settings).ok(),
            "127.0.0.1:9000".parse::<SocketAddr>().ok()
        );
    }

    #[test]
    fn hostname_is_rejected() {
        let settings = ServerSettings {
            host: "not a host".to_owned(),
            port: 80,
        };
        assert!(matches!(bind_address(&settings), Err(ServerError::Bind(_))));
    }
}
