//! Paginated list of full records.
//!
//! The list is loaded a page at a time. Each page listing yields only
//! names and locators, so every entry is then resolved to its full record
//! concurrently before the page is applied. A page is applied all or
//! nothing: a failed detail lookup leaves the loaded records untouched.
//!
//! At most one load is in flight. Calls made while a load is running are
//! skipped rather than queued, which also guarantees that pages are
//! appended strictly in offset order.

use std::sync::Arc;

use pokedex_client::CatalogSource;
use pokedex_types::{ApiError, LoadingState, PageCursor, Pokemon};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::outcome::ActionOutcome;

/// Observable state of the paginated list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListState {
    /// Records loaded so far, in listing order.
    pub records: Vec<Pokemon>,
    /// Lifecycle of the most recent load.
    pub loading: LoadingState,
    /// The failure of the most recent load, if it failed.
    pub error: Option<ApiError>,
    /// Where the next page starts.
    pub cursor: PageCursor,
    /// Whether the last listing reported a further page.
    pub has_more: bool,
}

impl ListState {
    const fn new(page_size: u32) -> Self {
        Self {
            records: Vec::new(),
            loading: LoadingState::Idle,
            error: None,
            cursor: PageCursor::new(page_size),
            has_more: true,
        }
    }
}

/// Owns the paginated list state and the operations that change it.
#[derive(Debug)]
pub struct ListController<S> {
    source: Arc<S>,
    state: watch::Sender<ListState>,
}

impl<S: CatalogSource> ListController<S> {
    /// Create an empty, idle list that loads `page_size` records per page.
    pub fn new(source: Arc<S>, page_size: u32) -> Self {
        let (state, _) = watch::channel(ListState::new(page_size));
        Self { source, state }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> ListState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.subscribe()
    }

    /// Load the first page.
    pub async fn initialize(&self) -> ActionOutcome {
        self.load_page(0).await
    }

    /// Reload from the first page, replacing everything loaded so far.
    ///
    /// This is the recovery path after a failed load.
    pub async fn refetch(&self) -> ActionOutcome {
        self.load_page(0).await
    }

    /// Load the page at the cursor, if there is one.
    ///
    /// Skipped without a request when a load is in flight or the last
    /// listing reported no further page.
    pub async fn load_more(&self) -> ActionOutcome {
        let offset = {
            let state = self.state.borrow();
            if !state.has_more || state.loading.is_loading() {
                debug!(
                    has_more = state.has_more,
                    loading = ?state.loading,
                    "load more skipped"
                );
                return ActionOutcome::Skipped;
            }
            state.cursor.offset
        };
        self.load_page(offset).await
    }

    /// Load the page starting at `offset`.
    ///
    /// Offset 0 replaces the loaded records; any other offset appends.
    /// On success the cursor advances to `offset + page_size`. On failure
    /// the records and cursor are left as they were.
    pub async fn load_page(&self, offset: u32) -> ActionOutcome {
        let started = self.state.send_if_modified(|state| {
            if state.loading.is_loading() {
                return false;
            }
            state.loading = LoadingState::Loading;
            state.error = None;
            true
        });
        if !started {
            debug!(offset, "page load already in flight");
            return ActionOutcome::Skipped;
        }

        let page_size = self.state.borrow().cursor.page_size;
        match self.fetch_records(page_size, offset).await {
            Ok((records, has_next)) => {
                let appended = records.len();
                self.state.send_modify(|state| {
                    if offset == 0 {
                        state.records = records;
                    } else {
                        state.records.extend(records);
                    }
                    state.cursor = state.cursor.advanced_from(offset);
                    state.has_more = has_next;
                    state.loading = LoadingState::Success;
                });
                info!(
                    offset,
                    appended,
                    total = self.state.borrow().records.len(),
                    has_more = has_next,
                    "page loaded"
                );
                ActionOutcome::Applied
            }
            Err(error) => {
                warn!(offset, error = %error, "page load failed");
                self.state.send_modify(|state| {
                    state.error = Some(error);
                    state.loading = LoadingState::Error;
                });
                ActionOutcome::Failed
            }
        }
    }

    async fn fetch_records(
        &self,
        page_size: u32,
        offset: u32,
    ) -> Result<(Vec<Pokemon>, bool), ApiError> {
        let page = self.source.fetch_page(page_size, offset).await?;
        let locators: Vec<_> = page.entries.into_iter().map(|entry| entry.locator).collect();
        let records = self.source.fetch_many(&locators).await?;
        Ok((records, page.has_next))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use pokedex_types::ApiErrorKind;

    use super::*;
    use crate::memory::{MemoryCatalog, fixture_record};

    const NAMES: [&str; 5] = ["bulbasaur", "ivysaur", "venusaur", "charmander", "charmeleon"];

    fn catalog() -> Arc<MemoryCatalog> {
        Arc::new(MemoryCatalog::new(
            NAMES
                .iter()
                .zip(1u32..)
                .map(|(name, id)| fixture_record(id, name, &["grass"]))
                .collect(),
        ))
    }

    fn names(state: &ListState) -> Vec<&str> {
        state.records.iter().map(|r| r.name.as_str()).collect()
    }

    #[tokio::test]
    async fn starts_idle_with_more_to_load() {
        let list = ListController::new(catalog(), 2);
        let state = list.snapshot();
        assert!(state.records.is_empty());
        assert_eq!(state.loading, LoadingState::Idle);
        assert!(state.has_more);
        assert_eq!(state.cursor, PageCursor::new(2));
    }

    #[tokio::test]
    async fn initialize_loads_first_page() {
        let list = ListController::new(catalog(), 2);
        assert_eq!(list.initialize().await, ActionOutcome::Applied);

        let state = list.snapshot();
        assert_eq!(names(&state), vec!["bulbasaur", "ivysaur"]);
        assert_eq!(state.loading, LoadingState::Success);
        assert_eq!(state.cursor.offset, 2);
        assert!(state.has_more);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn pages_append_in_order_until_exhausted() {
        let source = catalog();
        let list = ListController::new(Arc::clone(&source), 2);
        list.initialize().await;
        assert_eq!(list.load_more().await, ActionOutcome::Applied);
        assert_eq!(list.load_more().await, ActionOutcome::Applied);

        let state = list.snapshot();
        assert_eq!(names(&state), NAMES.to_vec());
        assert!(!state.has_more);
        assert_eq!(state.cursor.offset, 6);

        let calls = (source.page_calls(), source.detail_calls());
        assert_eq!(list.load_more().await, ActionOutcome::Skipped);
        assert_eq!((source.page_calls(), source.detail_calls()), calls);
    }

    #[tokio::test]
    async fn offset_zero_replaces_records() {
        let list = ListController::new(catalog(), 2);
        list.initialize().await;
        list.load_more().await;
        assert_eq!(list.snapshot().records.len(), 4);

        assert_eq!(list.refetch().await, ActionOutcome::Applied);
        let state = list.snapshot();
        assert_eq!(names(&state), vec!["bulbasaur", "ivysaur"]);
        assert_eq!(state.cursor.offset, 2);
    }

    #[tokio::test]
    async fn listing_failure_keeps_records_and_cursor() {
        let source = catalog();
        let list = ListController::new(Arc::clone(&source), 2);
        list.initialize().await;

        source.fail_pages(ApiError::network("connection refused"));
        assert_eq!(list.load_more().await, ActionOutcome::Failed);

        let state = list.snapshot();
        assert_eq!(state.loading, LoadingState::Error);
        assert_eq!(state.error.as_ref().unwrap().message, "connection refused");
        assert_eq!(names(&state), vec!["bulbasaur", "ivysaur"]);
        assert_eq!(state.cursor.offset, 2);
    }

    #[tokio::test]
    async fn one_failed_detail_fails_the_whole_page() {
        let source = catalog();
        let list = ListController::new(Arc::clone(&source), 2);
        list.initialize().await;

        source.fail_detail("charmander");
        assert_eq!(list.load_more().await, ActionOutcome::Failed);

        let state = list.snapshot();
        assert_eq!(state.records.len(), 2);
        assert_eq!(state.error.as_ref().unwrap().kind, ApiErrorKind::Network);
    }

    #[tokio::test]
    async fn refetch_recovers_after_failure() {
        let source = catalog();
        let list = ListController::new(Arc::clone(&source), 2);
        source.fail_pages(ApiError::network("offline"));
        assert_eq!(list.initialize().await, ActionOutcome::Failed);

        source.clear_failures();
        assert_eq!(list.refetch().await, ActionOutcome::Applied);
        let state = list.snapshot();
        assert_eq!(state.loading, LoadingState::Success);
        assert!(state.error.is_none());
        assert_eq!(state.records.len(), 2);
    }

    #[tokio::test]
    async fn load_more_is_skipped_while_loading() {
        let source = catalog();
        let list = Arc::new(ListController::new(Arc::clone(&source), 2));
        let gate = source.gate("bulbasaur");

        let first = tokio::spawn({
            let list = Arc::clone(&list);
            async move { list.initialize().await }
        });
        while !list.snapshot().loading.is_loading() {
            tokio::task::yield_now().await;
        }

        assert_eq!(list.load_more().await, ActionOutcome::Skipped);
        assert_eq!(list.load_page(2).await, ActionOutcome::Skipped);
        assert_eq!(source.page_calls(), 1);

        gate.notify_one();
        assert_eq!(first.await.unwrap(), ActionOutcome::Applied);
        assert_eq!(list.snapshot().records.len(), 2);
    }

    #[tokio::test]
    async fn subscribers_see_loading_then_success() {
        let list = ListController::new(catalog(), 2);
        let mut changes = list.subscribe();
        list.initialize().await;

        assert!(changes.has_changed().unwrap());
        assert_eq!(changes.borrow_and_update().loading, LoadingState::Success);
    }

    #[tokio::test]
    async fn details_are_fetched_concurrently_and_keep_listing_order() {
        let source = catalog();
        let list = Arc::new(ListController::new(Arc::clone(&source), 3));
        let gates: Vec<_> = NAMES[..3].iter().map(|name| source.gate(name)).collect();

        let load = tokio::spawn({
            let list = Arc::clone(&list);
            async move { list.initialize().await }
        });
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        // Every lookup of the page is in flight while the first is blocked.
        assert_eq!(source.detail_calls(), 3);
        assert!(list.snapshot().records.is_empty());

        for gate in gates.iter().rev() {
            gate.notify_one();
            tokio::task::yield_now().await;
        }
        assert_eq!(load.await.unwrap(), ActionOutcome::Applied);
        assert_eq!(names(&list.snapshot()), vec!["bulbasaur", "ivysaur", "venusaur"]);
    }
}
