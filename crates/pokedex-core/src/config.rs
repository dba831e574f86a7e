//! Configuration loading and typed config structures for the catalog viewer.
//!
//! The canonical configuration lives in `pokedex-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure, and provides a loader that reads the file and
//! applies environment overrides.

use std::path::Path;
use std::time::Duration;

use pokedex_client::ClientConfig;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is outside its allowed range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level viewer configuration.
///
/// Mirrors the structure of `pokedex-config.yaml`. Every field has a
/// default, so an empty file (or no file at all) is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Paging and search behavior.
    #[serde(default)]
    pub catalog: CatalogSettings,

    /// Web server bind address.
    #[serde(default)]
    pub server: ServerSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CatalogConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `POKEDEX_API_URL` overrides `api.base_url`
    /// - `POKEDEX_API_TIMEOUT_MS` overrides `api.request_timeout_ms`
    /// - `POKEDEX_HOST` overrides `server.host`
    /// - `POKEDEX_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::parse_without_env(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse_without_env(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yml yields a null document for empty input.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that the types alone do not enforce.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.page_size == 0 {
            return Err(ConfigError::Invalid(
                "catalog.page_size must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }

    /// Override values from environment variables.
    ///
    /// Variables that are unset or fail to parse leave the current value.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("POKEDEX_API_URL") {
            self.api.base_url = val;
        }
        if let Some(val) = env_parse("POKEDEX_API_TIMEOUT_MS") {
            self.api.request_timeout_ms = val;
        }
        if let Ok(val) = std::env::var("POKEDEX_HOST") {
            self.server.host = val;
        }
        if let Some(val) = env_parse("POKEDEX_PORT") {
            self.server.port = val;
        }
    }
}

/// Read and parse an environment variable, discarding parse failures.
fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse().ok())
}

/// Remote API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the catalog API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Fixed per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ApiConfig {
    /// Client settings derived from this section.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.clone())
            .with_timeout(Duration::from_millis(self.request_timeout_ms))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Paging and search behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogSettings {
    /// Records per page in the list view.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Quiescence window before a typed search term is committed.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl CatalogSettings {
    /// The debounce window as a [`Duration`].
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

/// Web server bind address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_base_url() -> String {
    pokedex_client::config::DEFAULT_BASE_URL.to_owned()
}

const fn default_request_timeout_ms() -> u64 {
    10_000
}

const fn default_page_size() -> u32 {
    20
}

const fn default_search_debounce_ms() -> u64 {
    500
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CatalogConfig::default();
        assert_eq!(config.api.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.api.request_timeout_ms, 10_000);
        assert_eq!(config.catalog.page_size, 20);
        assert_eq!(config.catalog.search_debounce(), Duration::from_millis(500));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
api:
  base_url: "http://localhost:9000/api/v2"
  request_timeout_ms: 2500

catalog:
  page_size: 12
  search_debounce_ms: 300

server:
  host: "127.0.0.1"
  port: 9090

logging:
  level: "debug"
"#;

        let config = CatalogConfig::parse_without_env(yaml);
        assert!(config.is_ok(), "parse failed: {config:?}");
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.api.base_url, "http://localhost:9000/api/v2");
        assert_eq!(config.catalog.page_size, 12);
        assert_eq!(config.catalog.search_debounce_ms, 300);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.level, "debug");

        let client = config.api.client_config();
        assert_eq!(client.request_timeout, Duration::from_millis(2500));
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "catalog:\n  page_size: 5\n";
        let config = CatalogConfig::parse_without_env(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        // Page size is overridden
        assert_eq!(config.catalog.page_size, 5);
        // Everything else uses defaults
        assert_eq!(config.catalog.search_debounce_ms, 500);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn parse_empty_yaml() {
        let config = CatalogConfig::parse_without_env("");
        assert_eq!(config.ok(), Some(CatalogConfig::default()));
    }

    #[test]
    fn parse_invalid_yaml_is_error() {
        let config = CatalogConfig::parse_without_env("catalog:\n  page_size: [1, 2]\n");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let config = CatalogConfig::parse_without_env("catalog:\n  page_size: 0\n");
        assert!(
            matches!(&config, Err(ConfigError::Invalid(msg)) if msg.contains("page_size")),
            "expected invalid page size, got {config:?}"
        );
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("pokedex-config.yaml");
        if path.exists() {
            let config = CatalogConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
