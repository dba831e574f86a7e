//! Identifier types for catalog records.
//!
//! A record is addressed either by its numeric id or by its unique
//! lowercase name. [`PokemonId`] wraps the numeric form; [`Locator`]
//! carries whichever form a caller has and renders it as the path
//! segment the remote API expects.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Positive numeric identifier of a record (national dex number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PokemonId(pub u32);

impl PokemonId {
    /// Return the inner numeric value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for PokemonId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PokemonId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A reference that resolves to exactly one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "bindings/")]
pub enum Locator {
    /// Numeric record id.
    Id(PokemonId),
    /// Record name (matched case-insensitively by the API).
    Name(String),
}

impl Locator {
    /// Parse free text into a locator.
    ///
    /// All-digit input becomes [`Locator::Id`]; anything else is treated
    /// as a name, trimmed and lowercased.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<u32>() {
            Ok(id) => Self::Id(PokemonId(id)),
            Err(_) => Self::Name(trimmed.to_lowercase()),
        }
    }

    /// Extract a locator from a resource URL such as
    /// `https://pokeapi.co/api/v2/pokemon/25/`.
    ///
    /// The locator is the second-to-last `/`-separated segment, which is
    /// the last path component when the URL carries a trailing slash.
    /// Returns `None` when that segment is missing or empty.
    pub fn from_resource_url(url: &str) -> Option<Self> {
        let segment = url.rsplit('/').nth(1)?;
        if segment.is_empty() {
            return None;
        }
        Some(Self::parse(segment))
    }
}

impl core::fmt::Display for Locator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<PokemonId> for Locator {
    fn from(id: PokemonId) -> Self {
        Self::Id(id)
    }
}
