//! State controllers, display formatting, and configuration for the
//! Pokedex catalog viewer.
//!
//! Each controller owns one piece of observable state behind a
//! [`tokio::sync::watch`] channel and is generic over the
//! [`CatalogSource`](pokedex_client::CatalogSource) it reads from.
//!
//! # Modules
//!
//! - [`list`] -- Paginated list with concurrent detail fan-out.
//! - [`search`] -- Name search with superseded-response discard.
//! - [`detail`] -- Single-record detail view.
//! - [`debounce`] -- Quiescence-window commit of typed search input.
//! - [`display`] -- Pure formatting: ids, names, type labels and colors,
//!   stats, measurements, abilities.
//! - [`config`] -- Configuration loading from `pokedex-config.yaml`.
//! - [`memory`] -- [`MemoryCatalog`](memory::MemoryCatalog), an
//!   in-memory source.
//! - [`outcome`] -- [`ActionOutcome`], what a controller action did.

pub mod config;
pub mod debounce;
pub mod detail;
pub mod display;
pub mod list;
pub mod memory;
pub mod outcome;
pub mod search;

pub use debounce::Debouncer;
pub use detail::{DetailController, DetailState};
pub use list::{ListController, ListState};
pub use outcome::ActionOutcome;
pub use search::{PendingSearch, SearchController, SearchState};
