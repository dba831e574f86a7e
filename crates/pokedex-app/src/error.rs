//! Error types for the catalog viewer binary.
//!
//! [`AppError`] is the top-level error type that wraps all possible
//! failure modes during startup.

/// Top-level error for the catalog viewer binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that startup code can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: pokedex_core::config::ConfigError,
    },

    /// The API client could not be built.
    #[error("client error: {source}")]
    Client {
        /// The underlying client error.
        #[from]
        source: pokedex_client::ClientError,
    },

    /// The web state could not be built.
    #[error("web error: {source}")]
    Web {
        /// The underlying web error.
        #[from]
        source: pokedex_web::WebError,
    },

    /// The server failed to start.
    #[error("server error: {source}")]
    Startup {
        /// The underlying startup error.
        #[from]
        source: pokedex_web::StartupError,
    },
}
