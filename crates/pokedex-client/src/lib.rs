//! Remote catalog API client for the Pokedex catalog viewer.
//!
//! Issues the three request shapes the viewer needs (paged listing,
//! record by locator, record by name) and normalizes every failure into
//! the shared [`ApiError`](pokedex_types::ApiError) before it reaches a
//! controller.
//!
//! # Architecture
//!
//! ```text
//! controller --> CatalogSource --> PokeApiClient --> reqwest --> PokeAPI
//!                     ^
//!                     '-- in-memory sources in tests
//! ```

pub mod config;
pub mod error;
pub mod pokeapi;
pub mod source;

pub use config::ClientConfig;
pub use error::ClientError;
pub use pokeapi::PokeApiClient;
pub use source::CatalogSource;
