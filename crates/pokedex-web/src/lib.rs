//! Rendering boundary for the Pokedex catalog viewer.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **HTML page** (`GET /`) with the search input, the active catalog
//!   view, and the selection panel, plus a fragment endpoint for
//!   in-place refresh
//! - **REST endpoints** for reading controller snapshots and running
//!   controller actions (load more, reload, search input, selection)
//! - **`WebSocket` endpoint** (`/ws/state`) pushing a [`ViewEvent`] for
//!   every state change
//!
//! # Architecture
//!
//! [`AppState`] owns the controllers from `pokedex-core`. Handlers never
//! mutate state directly: they call controller actions and render
//! snapshots through [`view`], which is where display formatting and the
//! page's visibility rules are applied.
//!
//! [`ViewEvent`]: ws::ViewEvent

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;
pub mod templates;
pub mod view;
pub mod ws;

// Re-export primary types for convenience.
pub use error::WebError;
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use startup::{StartupError, spawn_server};
pub use state::AppState;
pub use view::ViewMode;
