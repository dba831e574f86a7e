//! Catalog viewer binary.
//!
//! Wires the remote API client, the state controllers, and the web
//! server together, then serves until interrupted.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `pokedex-config.yaml` (or `POKEDEX_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the API client
//! 4. Build the controllers and start the search debouncer
//! 5. Start loading the first page of the list in the background
//! 6. Spawn the web server
//! 7. Wait for `Ctrl-C`

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use pokedex_client::PokeApiClient;
use pokedex_core::ActionOutcome;
use pokedex_core::config::CatalogConfig;
use pokedex_web::{AppState, spawn_server};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "pokedex-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if any startup step fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration. Logging is not up yet, so the outcome is
    //    reported once it is.
    let (config, config_path) = load_config().context("loading configuration")?;

    // 2. Initialize structured logging. RUST_LOG wins over the config.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("pokedex starting");
    if config_path.is_none() {
        info!("Config file not found, using defaults");
    }
    info!(
        path = ?config_path,
        api = config.api.base_url,
        request_timeout_ms = config.api.request_timeout_ms,
        page_size = config.catalog.page_size,
        search_debounce_ms = config.catalog.search_debounce_ms,
        "Configuration resolved"
    );

    // 3-4. Client, controllers, debouncer.
    let state = build_state(&config).context("building catalog state")?;

    // 5. First page. The load marks the list as loading before its first
    //    request, so pages served meanwhile show the spinner. A failure is
    //    shown on the page with a reload action and does not stop startup.
    let first_page = tokio::spawn({
        let state = Arc::clone(&state);
        async move {
            match state.list.initialize().await {
                ActionOutcome::Applied => info!("First page loaded"),
                outcome => warn!(?outcome, "First page did not load"),
            }
        }
    });

    // 6. Web server.
    let (addr, server) = spawn_server(&config.server, Arc::clone(&state))
        .await
        .map_err(AppError::from)
        .context("starting web server")?;
    info!(%addr, "Catalog viewer ready");

    // 7. Serve until interrupted.
    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;
    info!("Shutdown signal received");
    first_page.abort();
    server.abort();

    Ok(())
}

/// Build the API client and the shared web state.
fn build_state(config: &CatalogConfig) -> Result<Arc<AppState<PokeApiClient>>, AppError> {
    let client = Arc::new(PokeApiClient::new(&config.api.client_config())?);
    let state = AppState::new(client, &config.catalog)?;
    Ok(Arc::new(state))
}

/// Load configuration from `POKEDEX_CONFIG` or [`DEFAULT_CONFIG_PATH`].
///
/// A missing file yields defaults with environment overrides applied.
/// Returns the path that was read, if any.
fn load_config() -> Result<(CatalogConfig, Option<PathBuf>), AppError> {
    let path = std::env::var_os("POKEDEX_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if path.exists() {
        let config = CatalogConfig::from_file(&path)?;
        Ok((config, Some(path)))
    } else {
        let mut config = CatalogConfig::default();
        config.apply_env_overrides();
        Ok((config, None))
    }
}
