//! Axum router construction.
//!
//! Assembles all routes (HTML, REST, `WebSocket`) into a single
//! [`Router`] with CORS and request tracing.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use pokedex_client::CatalogSource;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router.
///
/// See [`handlers`] for the endpoint table; `GET /ws/state` streams
/// state changes.
pub fn build_router<S: CatalogSource + 'static>(state: Arc<AppState<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // HTML
        .route("/", get(handlers::index::<S>))
        .route("/fragments/catalog", get(handlers::catalog_fragment::<S>))
        // WebSocket
        .route("/ws/state", get(ws::ws_state::<S>))
        // REST API
        .route("/api/list", get(handlers::list_snapshot::<S>))
        .route("/api/list/more", post(handlers::list_more::<S>))
        .route("/api/list/reload", post(handlers::list_reload::<S>))
        .route("/api/reset", post(handlers::reset::<S>))
        .route(
            "/api/search",
            get(handlers::search_snapshot::<S>).post(handlers::search_input::<S>),
        )
        .route(
            "/api/selection",
            get(handlers::selection_snapshot::<S>)
                .post(handlers::select::<S>)
                .delete(handlers::clear_selection::<S>),
        )
        .route("/api/view", get(handlers::view_mode::<S>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
