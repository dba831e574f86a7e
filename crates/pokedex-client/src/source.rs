//! The seam between the state controllers and the network.
//!
//! Controllers are generic over [`CatalogSource`] rather than holding a
//! trait object: async methods are not dyn-compatible, and the only
//! production implementation is [`PokeApiClient`](crate::PokeApiClient).
//! Tests substitute in-memory sources.

use std::future::Future;

use futures::future::try_join_all;
use pokedex_types::{ApiError, Locator, Page, Pokemon};

/// A remote catalog that can list pages and resolve single records.
///
/// Every method is idempotent and has no side effect beyond the
/// request itself. Failures are already normalized into [`ApiError`].
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of name/locator pairs.
    fn fetch_page(
        &self,
        page_size: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Page, ApiError>> + Send;

    /// Fetch the full record a locator resolves to.
    fn fetch_detail(
        &self,
        locator: &Locator,
    ) -> impl Future<Output = Result<Pokemon, ApiError>> + Send;

    /// Fetch a record by name, case-insensitively.
    ///
    /// The name is trimmed and lowercased before the lookup. An empty
    /// name fails with a not-found error without touching the network.
    fn fetch_by_name(&self, name: &str) -> impl Future<Output = Result<Pokemon, ApiError>> + Send {
        let normalized = name.trim().to_lowercase();
        async move {
            if normalized.is_empty() {
                return Err(ApiError::not_found("no record name given"));
            }
            self.fetch_detail(&Locator::Name(normalized)).await
        }
    }

    /// Fetch several records concurrently.
    ///
    /// The result preserves the order of `locators`. The first failure
    /// aborts the whole batch.
    fn fetch_many(
        &self,
        locators: &[Locator],
    ) -> impl Future<Output = Result<Vec<Pokemon>, ApiError>> + Send {
        try_join_all(locators.iter().map(|locator| self.fetch_detail(locator)))
    }
}
