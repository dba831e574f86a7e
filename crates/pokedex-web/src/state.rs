//! Shared application state for the web server.
//!
//! [`AppState`] owns the three controllers, the view mode, and the
//! search debouncer. Raw search input goes to the debouncer; each
//! committed term switches the view mode, takes its search token, and
//! spawns the lookup, so a newer commit can supersede a lookup still in
//! flight.

use std::sync::Arc;

use pokedex_client::CatalogSource;
use pokedex_core::config::CatalogSettings;
use pokedex_core::{
    ActionOutcome, DetailController, Debouncer, ListController, SearchController,
};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::error::WebError;
use crate::templates::Templates;
use crate::view::{CatalogView, SelectionView, ViewMode};

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug)]
pub struct AppState<S> {
    /// The paginated list.
    pub list: Arc<ListController<S>>,
    /// The name search.
    pub search: Arc<SearchController<S>>,
    /// The selected record.
    pub detail: Arc<DetailController<S>>,
    mode: Arc<watch::Sender<ViewMode>>,
    debouncer: Debouncer,
    templates: Templates,
}

impl<S: CatalogSource + 'static> AppState<S> {
    /// Build the controllers over `source` and start the debouncer.
    ///
    /// Must be called from within a Tokio runtime. The list starts idle;
    /// call [`ListController::initialize`] to load the first page.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Template`] if the embedded templates fail to
    /// parse.
    pub fn new(source: Arc<S>, settings: &CatalogSettings) -> Result<Self, WebError> {
        let list = Arc::new(ListController::new(Arc::clone(&source), settings.page_size));
        let search = Arc::new(SearchController::new(Arc::clone(&source)));
        let detail = Arc::new(DetailController::new(source));
        let (mode, _) = watch::channel(ViewMode::Browse);
        let mode = Arc::new(mode);

        let (debouncer, _task) = Debouncer::spawn(settings.search_debounce(), {
            let search = Arc::clone(&search);
            let mode = Arc::clone(&mode);
            move |term: String| {
                mode.send_replace(ViewMode::for_term(&term));
                if let Some(pending) = search.begin(&term) {
                    let search = Arc::clone(&search);
                    tokio::spawn(async move {
                        search.resolve(pending).await;
                    });
                }
            }
        });

        info!(
            page_size = settings.page_size,
            debounce_ms = settings.search_debounce_ms,
            "Catalog state initialized"
        );

        Ok(Self {
            list,
            search,
            detail,
            mode,
            debouncer,
            templates: Templates::new()?,
        })
    }
}

impl<S: CatalogSource> AppState<S> {
    /// The active view mode.
    pub fn mode(&self) -> ViewMode {
        *self.mode.borrow()
    }

    /// Subscribe to view mode changes.
    pub fn subscribe_mode(&self) -> watch::Receiver<ViewMode> {
        self.mode.subscribe()
    }

    /// Feed raw search input to the debouncer.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Unavailable`] if the debouncer task has stopped.
    pub fn submit_term(&self, raw: String) -> Result<(), WebError> {
        if self.debouncer.input(raw) {
            Ok(())
        } else {
            Err(WebError::Unavailable("search debouncer has stopped".to_owned()))
        }
    }

    /// Return the session to its starting point and reload the list.
    ///
    /// Clears the search and the selection, switches back to browse mode,
    /// and makes the debouncer forget its last commit so a repeated term
    /// runs again. The outcome is that of the list reload.
    pub async fn reset(&self) -> ActionOutcome {
        if !self.debouncer.reset() {
            warn!("search debouncer has stopped; reset skipped it");
        }
        self.search.search("").await;
        self.detail.clear();
        self.mode.send_replace(ViewMode::Browse);
        let outcome = self.list.refetch().await;
        info!(outcome = ?outcome, "Session reset");
        outcome
    }

    /// The catalog section for the active mode.
    pub fn catalog_view(&self) -> CatalogView {
        CatalogView::compose(self.mode(), &self.list.snapshot(), &self.search.snapshot())
    }

    /// The selection panel.
    pub fn selection_view(&self) -> SelectionView {
        SelectionView::from(&self.detail.snapshot())
    }

    /// The template renderer.
    pub const fn templates(&self) -> &Templates {
        &self.templates
    }
}
