//! Name search.
//!
//! A search resolves one term to at most one record. Every call takes a
//! new generation token under the state lock; a response is applied only
//! if its token is still current, so a slow response for an old term can
//! never overwrite the result of a newer one.

use std::sync::Arc;

use pokedex_client::CatalogSource;
use pokedex_types::{ApiError, LoadingState, Pokemon};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::outcome::ActionOutcome;

/// Observable state of the name search.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    /// Zero or one matching record.
    pub results: Vec<Pokemon>,
    /// Lifecycle of the most recent search.
    pub loading: LoadingState,
    /// The failure of the most recent search, if it failed.
    pub error: Option<ApiError>,
    /// The normalized term of the most recent search; empty when cleared.
    pub term: String,
    /// Token of the most recent search. Responses for older tokens are
    /// discarded.
    pub generation: u64,
}

/// A search that holds its generation token but has not been resolved.
#[derive(Debug)]
#[must_use]
pub struct PendingSearch {
    term: String,
    token: u64,
}

impl PendingSearch {
    /// The normalized term.
    pub fn term(&self) -> &str {
        &self.term
    }
}

/// Owns the search state and the operation that changes it.
#[derive(Debug)]
pub struct SearchController<S> {
    source: Arc<S>,
    state: watch::Sender<SearchState>,
}

impl<S: CatalogSource> SearchController<S> {
    /// Create an idle search with no results.
    pub fn new(source: Arc<S>) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self { source, state }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Search for a record by name.
    ///
    /// The term is trimmed and lowercased. An empty term resets the state
    /// to idle with no results, makes no request, and supersedes any
    /// search still in flight.
    pub async fn search(&self, term: &str) -> ActionOutcome {
        let Some(pending) = self.begin(term) else {
            return ActionOutcome::Cleared;
        };
        self.resolve(pending).await
    }

    /// Take the generation token for `term` without waiting for the lookup.
    ///
    /// Tokens are ordered by the calls to `begin`, not by when the lookups
    /// run, so a caller that spawns [`resolve`](Self::resolve) keeps the
    /// order in which terms were submitted. Returns `None` when the term
    /// is empty; the state is then already cleared.
    pub fn begin(&self, term: &str) -> Option<PendingSearch> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            self.state.send_modify(|state| {
                state.generation = state.generation.wrapping_add(1);
                state.results.clear();
                state.loading = LoadingState::Idle;
                state.error = None;
                state.term.clear();
            });
            debug!("search cleared");
            return None;
        }

        let mut token = 0;
        self.state.send_modify(|state| {
            state.generation = state.generation.wrapping_add(1);
            token = state.generation;
            state.loading = LoadingState::Loading;
            state.error = None;
            state.term.clone_from(&term);
        });
        Some(PendingSearch { term, token })
    }

    /// Run the lookup for a search taken by [`begin`](Self::begin).
    ///
    /// The response is discarded if a newer search began in the meantime.
    pub async fn resolve(&self, pending: PendingSearch) -> ActionOutcome {
        let PendingSearch { term, token } = pending;
        let result = self.source.fetch_by_name(&term).await;
        let outcome = if result.is_ok() {
            ActionOutcome::Applied
        } else {
            ActionOutcome::Failed
        };
        if let Err(error) = &result {
            warn!(term = %term, error = %error, "search failed");
        }

        let applied = self.state.send_if_modified(|state| {
            if state.generation != token {
                return false;
            }
            match result {
                Ok(record) => {
                    state.results = vec![record];
                    state.loading = LoadingState::Success;
                }
                Err(error) => {
                    state.results.clear();
                    state.error = Some(error);
                    state.loading = LoadingState::Error;
                }
            }
            true
        });

        if applied {
            info!(term = %term, outcome = ?outcome, "search settled");
            outcome
        } else {
            debug!(term = %term, token, "superseded search response discarded");
            ActionOutcome::Discarded
        }
    }
}
