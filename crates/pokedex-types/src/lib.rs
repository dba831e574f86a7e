//! Shared type definitions for the Pokedex catalog viewer.
//!
//! This crate is the single source of truth for the record, page, and
//! error shapes used across the workspace. Types flow downstream to
//! `TypeScript` via `ts-rs` for browser consumers of the web API.
//!
//! # Modules
//!
//! - [`ids`] -- Record identifiers and the [`Locator`] reference type
//! - [`enums`] -- Loading state and error taxonomy
//! - [`structs`] -- Record and page structs mirroring the remote API
//! - [`error`] -- The uniform [`ApiError`] value

pub mod enums;
pub mod error;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{ApiErrorKind, LoadingState};
pub use error::ApiError;
pub use ids::{Locator, PokemonId};
pub use structs::{
    AbilitySlot, Artwork, NamedResource, OtherSprites, Page, PageCursor, PageEntry, PageResponse,
    Pokemon, Sprites, StatEntry, TypeSlot,
};
