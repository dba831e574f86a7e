//! Single-record detail view.
//!
//! Uses the same generation scheme as the search: selecting a new record
//! while a previous lookup is in flight discards the previous response.

use std::sync::Arc;

use pokedex_client::CatalogSource;
use pokedex_types::{ApiError, LoadingState, Locator, Pokemon};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::outcome::ActionOutcome;

/// Observable state of the detail view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailState {
    /// The locator of the most recent lookup.
    pub locator: Option<Locator>,
    /// The resolved record.
    pub record: Option<Pokemon>,
    /// Lifecycle of the most recent lookup.
    pub loading: LoadingState,
    /// The failure of the most recent lookup, if it failed.
    pub error: Option<ApiError>,
    /// Token of the most recent lookup.
    pub generation: u64,
}

/// Owns the detail state.
#[derive(Debug)]
pub struct DetailController<S> {
    source: Arc<S>,
    state: watch::Sender<DetailState>,
}

impl<S: CatalogSource> DetailController<S> {
    /// Create an empty detail view.
    pub fn new(source: Arc<S>) -> Self {
        let (state, _) = watch::channel(DetailState::default());
        Self { source, state }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> DetailState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    /// Close the detail view, discarding any lookup in flight.
    pub fn clear(&self) {
        self.state.send_modify(|state| {
            let generation = state.generation.wrapping_add(1);
            *state = DetailState {
                generation,
                ..DetailState::default()
            };
        });
    }

    /// Resolve `locator` to a full record.
    ///
    /// The previous record stays visible until the new one arrives; a
    /// failure clears it.
    pub async fn fetch(&self, locator: &Locator) -> ActionOutcome {
        let mut token = 0;
        self.state.send_modify(|state| {
            state.generation = state.generation.wrapping_add(1);
            token = state.generation;
            state.locator = Some(locator.clone());
            state.loading = LoadingState::Loading;
            state.error = None;
        });

        let result = self.source.fetch_detail(locator).await;
        let outcome = if result.is_ok() {
            ActionOutcome::Applied
        } else {
            ActionOutcome::Failed
        };
        if let Err(error) = &result {
            warn!(locator = %locator, error = %error, "detail lookup failed");
        }

        let applied = self.state.send_if_modified(|state| {
            if state.generation != token {
                return false;
            }
            match result {
                Ok(record) => {
                    state.record = Some(record);
                    state.loading = LoadingState::Success;
                }
                Err(error) => {
                    state.record = None;
                    state.error = Some(error);
                    state.loading = LoadingState::Error;
                }
            }
            true
        });

        if applied {
            info!(locator = %locator, outcome = ?outcome, "detail settled");
            outcome
        } else {
            debug!(locator = %locator, "superseded detail response discarded");
            ActionOutcome::Discarded
        }
    }
}
