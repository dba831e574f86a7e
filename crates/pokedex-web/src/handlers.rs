//! REST and HTML endpoint handlers.
//!
//! Reads serve controller snapshots; writes run the controller action
//! and answer with its outcome plus the resulting snapshot.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Full HTML page |
//! | `GET` | `/fragments/catalog` | Active catalog section and selection panel |
//! | `GET` | `/api/list` | List snapshot |
//! | `POST` | `/api/list/more` | Load the next page |
//! | `POST` | `/api/list/reload` | Reload from the first page |
//! | `POST` | `/api/reset` | Clear search and selection, back to browse, reload the list |
//! | `GET` | `/api/search` | Search snapshot |
//! | `POST` | `/api/search` | Feed raw input to the debouncer (202) |
//! | `GET` | `/api/selection` | Selection snapshot |
//! | `POST` | `/api/selection` | Select a record by id or name |
//! | `DELETE` | `/api/selection` | Close the selection |
//! | `GET` | `/api/view` | Active view mode |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use pokedex_client::CatalogSource;
use pokedex_core::ActionOutcome;
use pokedex_types::Locator;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::WebError;
use crate::state::AppState;
use crate::view::{ListView, SearchView, SelectionView, ViewMode};

// ---------------------------------------------------------------------------
// Request and response bodies
// ---------------------------------------------------------------------------

/// Body of `POST /api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchInput {
    /// Raw input, untrimmed.
    pub term: String,
}

/// Body of `POST /api/selection`.
#[derive(Debug, Deserialize)]
pub struct SelectionInput {
    /// Numeric id or name.
    pub locator: String,
}

/// Response of a controller action.
#[derive(Debug, Serialize)]
pub struct ActionResponse<T> {
    /// What the action did.
    pub outcome: ActionOutcome,
    /// The state after the action.
    pub state: T,
}

/// Response of `GET /api/view`.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    /// The active mode.
    pub mode: ViewMode,
}

// ---------------------------------------------------------------------------
// HTML
// ---------------------------------------------------------------------------

/// Serve the full page.
pub async fn index<S: CatalogSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Html<String>, WebError> {
    state
        .templates()
        .page(&state.catalog_view(), &state.selection_view())
        .map(Html)
}

/// Serve the active catalog section for in-place refresh.
pub async fn catalog_fragment<S: CatalogSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Html<String>, WebError> {
    state
        .templates()
        .catalog(&state.catalog_view(), &state.selection_view())
        .map(Html)
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// Current list snapshot.
pub async fn list_snapshot<S: CatalogSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<ListView> {
    Json(ListView::from(&state.list.snapshot()))
}

/// Load the next page.
pub async fn list_more<S: CatalogSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<ActionResponse<ListView>> {
    let outcome = state.list.load_more().await;
    Json(ActionResponse {
        outcome,
        state: ListView::from(&state.list.snapshot()),
    })
}

/// Reload from the first page.
pub async fn list_reload<S: CatalogSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<ActionResponse<ListView>> {
    let outcome = state.list.refetch().await;
    Json(ActionResponse {
        outcome,
        state: ListView::from(&state.list.snapshot()),
    })
}

/// Reset the whole session. This is the error banner's recovery action.
pub async fn reset<S: CatalogSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<ActionResponse<ListView>> {
    let outcome = state.reset().await;
    Json(ActionResponse {
        outcome,
        state: ListView::from(&state.list.snapshot()),
    })
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Current search snapshot.
pub async fn search_snapshot<S: CatalogSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<SearchView> {
    Json(SearchView::from(&state.search.snapshot()))
}

/// Accept raw search input. The search runs once the input settles.
pub async fn search_input<S: CatalogSource>(
    State(state): State<Arc<AppState<S>>>,
    Json(input): Json<SearchInput>,
) -> Result<impl IntoResponse, WebError> {
    debug!(len = input.term.len(), "search input received");
    state.submit_term(input.term)?;
    Ok((
        StatusCode::ACCEPTED,
        Json(serde_json::json!({ "accepted": true })),
    ))
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Current selection snapshot.
pub async fn selection_snapshot<S: CatalogSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<SelectionView> {
    Json(state.selection_view())
}

/// Select a record and wait for its lookup.
pub async fn select<S: CatalogSource>(
    State(state): State<Arc<AppState<S>>>,
    Json(input): Json<SelectionInput>,
) -> Result<Json<ActionResponse<SelectionView>>, WebError> {
    if input.locator.trim().is_empty() {
        return Err(WebError::InvalidRequest("locator must not be empty".to_owned()));
    }
    let outcome = state.detail.fetch(&Locator::parse(&input.locator)).await;
    Ok(Json(ActionResponse {
        outcome,
        state: state.selection_view(),
    }))
}

/// Close the selection.
pub async fn clear_selection<S: CatalogSource>(
    State(state): State<Arc<AppState<S>>>,
) -> StatusCode {
    state.detail.clear();
    StatusCode::NO_CONTENT
}

// ---------------------------------------------------------------------------
// View mode
// ---------------------------------------------------------------------------

/// The active view mode.
pub async fn view_mode<S: CatalogSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<ViewResponse> {
    Json(ViewResponse { mode: state.mode() })
}
