//! Configuration for the remote catalog client.

use std::time::Duration;

/// Default base URL of the public catalog API.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default fixed request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Settings for [`PokeApiClient`](crate::PokeApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL without a trailing slash (e.g. `https://pokeapi.co/api/v2`).
    pub base_url: String,
    /// Upper bound on a single request, connect through body read.
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Create a config for the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Replace the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn with_timeout_overrides() {
        let config = ClientConfig::new("http://localhost:9000").with_timeout(Duration::from_millis(50));
        assert_eq!(config.request_timeout, Duration::from_millis(50));
        assert_eq!(config.base_url, "http://localhost:9000");
    }
}
