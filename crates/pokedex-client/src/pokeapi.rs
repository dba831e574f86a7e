//! `reqwest`-backed implementation of [`CatalogSource`] for PokeAPI.
//!
//! Two endpoints are used:
//!
//! | Request | Path |
//! |---------|------|
//! | page listing | `GET {base}/pokemon?limit={n}&offset={k}` |
//! | single record | `GET {base}/pokemon/{idOrName}` |

use pokedex_types::{ApiError, Locator, Page, PageResponse, Pokemon};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{self, ClientError};
use crate::source::CatalogSource;

/// HTTP client for the public catalog API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Build a client with the configured base URL and fixed timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for an empty base URL and
    /// [`ClientError::Build`] if the TLS backend cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = config.base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            return Err(ClientError::Config("base URL is empty".to_owned()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Build(format!("{e}")))?;

        Ok(Self { client, base_url })
    }

    /// The normalized base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the page listing.
    fn page_url(&self, page_size: u32, offset: u32) -> String {
        format!("{}/pokemon?limit={page_size}&offset={offset}", self.base_url)
    }

    /// URL of a single record.
    fn detail_url(&self, locator: &Locator) -> String {
        format!("{}/pokemon/{locator}", self.base_url)
    }

    /// Issue a GET and decode the JSON body, normalizing every failure.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(url, "catalog request");

        let response = self.client.get(url).send().await.map_err(|e| {
            let err = error::from_transport(&e);
            warn!(url, error = %err, "catalog request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = error::from_status(status.as_u16(), &body);
            warn!(url, status = status.as_u16(), error = %err, "catalog request rejected");
            return Err(err);
        }

        let bytes = response.bytes().await.map_err(|e| {
            let err = error::from_transport(&e);
            warn!(url, error = %err, "catalog response body read failed");
            err
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            let err = error::from_decode(&e);
            warn!(url, error = %err, "catalog response decode failed");
            err
        })
    }
}

impl CatalogSource for PokeApiClient {
    async fn fetch_page(&self, page_size: u32, offset: u32) -> Result<Page, ApiError> {
        let url = self.page_url(page_size, offset);
        let response: PageResponse = self.get_json(&url).await?;
        let page = Page::from(response);
        debug!(
            offset,
            page_size,
            entries = page.entries.len(),
            has_next = page.has_next,
            "page fetched"
        );
        Ok(page)
    }

    async fn fetch_detail(&self, locator: &Locator) -> Result<Pokemon, ApiError> {
        let url = self.detail_url(locator);
        self.get_json(&url).await
    }
}
