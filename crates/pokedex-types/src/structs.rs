//! Record and page structs mirroring the remote API's JSON shapes.
//!
//! Field names follow the API verbatim so that responses deserialize
//! without a mapping layer. Nullable upstream fields are `Option`s.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{Locator, PokemonId};

// ---------------------------------------------------------------------------
// Shared reference shape
// ---------------------------------------------------------------------------

/// A `{name, url}` pair the API uses to point at another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NamedResource {
    /// Resource name (lowercase, hyphenated).
    pub name: String,
    /// Absolute URL of the resource.
    pub url: String,
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One catalog record as returned by `GET /pokemon/{idOrName}`.
///
/// Immutable once fetched. Controllers replace records wholesale and
/// never patch individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Pokemon {
    /// Numeric id.
    pub id: PokemonId,
    /// Unique lowercase name.
    pub name: String,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Experience granted when defeated. Null for some forms upstream.
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Sprite image URLs.
    #[serde(default)]
    pub sprites: Sprites,
    /// Type slots in slot order.
    pub types: Vec<TypeSlot>,
    /// Base statistics.
    pub stats: Vec<StatEntry>,
    /// Ability slots.
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
}

impl Pokemon {
    /// Locator addressing this record by id.
    pub const fn locator(&self) -> Locator {
        Locator::Id(self.id)
    }

    /// Base value of the named statistic, if the record carries it.
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|entry| entry.stat.name == name)
            .map(|entry| entry.base_stat)
    }
}

/// Sprite image URLs for a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Sprites {
    /// Default front sprite.
    #[serde(default)]
    pub front_default: Option<String>,
    /// Shiny front sprite.
    #[serde(default)]
    pub front_shiny: Option<String>,
    /// Default back sprite.
    #[serde(default)]
    pub back_default: Option<String>,
    /// Shiny back sprite.
    #[serde(default)]
    pub back_shiny: Option<String>,
    /// Alternative artwork sets.
    #[serde(default)]
    pub other: OtherSprites,
}

/// The `sprites.other` block. Only the official artwork is modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct OtherSprites {
    /// Official artwork.
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

/// A single artwork entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Artwork {
    /// Front-facing artwork URL.
    #[serde(default)]
    pub front_default: Option<String>,
}

/// A type (category tag) held in a given slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TypeSlot {
    /// 1-based slot.
    pub slot: u8,
    /// The type reference.
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// A named base statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StatEntry {
    /// Base value.
    pub base_stat: u32,
    /// Effort points yielded.
    pub effort: u32,
    /// The statistic reference (`hp`, `attack`, ...).
    pub stat: NamedResource,
}

/// An ability held in a given slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AbilitySlot {
    /// The ability reference.
    pub ability: NamedResource,
    /// Whether this is a hidden ability.
    pub is_hidden: bool,
    /// 1-based slot.
    pub slot: u8,
}

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

/// Raw envelope of `GET /pokemon?limit=&offset=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PageResponse {
    /// Total number of records the API knows about.
    pub count: u32,
    /// URL of the next page, `null` on the last page.
    pub next: Option<String>,
    /// URL of the previous page, `null` on the first page.
    pub previous: Option<String>,
    /// Entries on this page.
    pub results: Vec<NamedResource>,
}

/// One entry of a [`Page`]: a display name and the locator for its detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PageEntry {
    /// Record name.
    pub name: String,
    /// Locator resolving to the full record.
    pub locator: Locator,
}

/// A page of the listing, projected from [`PageResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Page {
    /// Total number of records the API knows about.
    pub total_count: u32,
    /// Whether the server reported a further page.
    pub has_next: bool,
    /// Entries in server order.
    pub entries: Vec<PageEntry>,
}

impl From<PageResponse> for Page {
    fn from(response: PageResponse) -> Self {
        let entries = response
            .results
            .into_iter()
            .map(|resource| {
                let locator = Locator::from_resource_url(&resource.url)
                    .unwrap_or_else(|| Locator::Name(resource.name.clone()));
                PageEntry {
                    name: resource.name,
                    locator,
                }
            })
            .collect();
        Self {
            total_count: response.count,
            has_next: response.next.is_some(),
            entries,
        }
    }
}

/// Pagination progress of the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PageCursor {
    /// Offset the next page will be requested from.
    pub offset: u32,
    /// Records requested per page.
    pub page_size: u32,
}

impl PageCursor {
    /// A cursor at offset 0.
    pub const fn new(page_size: u32) -> Self {
        Self {
            offset: 0,
            page_size,
        }
    }

    /// The cursor after a successful load from `offset`.
    #[must_use]
    pub const fn advanced_from(self, offset: u32) -> Self {
        Self {
            offset: offset.saturating_add(self.page_size),
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu_json() -> serde_json::Value {
        serde_json::json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "sprites": {
                "front_default": "https://img/25.png",
                "front_shiny": null,
                "back_default": null,
                "back_shiny": null,
                "other": {
                    "official-artwork": { "front_default": "https://art/25.png" },
                    "home": { "front_default": "https://home/25.png" }
                }
            },
            "types": [
                { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
            ],
            "stats": [
                { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "u" } },
                { "base_stat": 55, "effort": 0, "stat": { "name": "attack", "url": "u" } }
            ],
            "abilities": [
                { "ability": { "name": "static", "url": "u" }, "is_hidden": false, "slot": 1 }
            ],
            "moves": []
        })
    }

    #[test]
    fn record_decodes_from_api_shape() {
        let record: Result<Pokemon, _> = serde_json::from_value(pikachu_json());
        assert!(record.is_ok(), "decode failed: {record:?}");
        let Ok(record) = record else { return };
        assert_eq!(record.id, PokemonId(25));
        assert_eq!(record.types.len(), 1);
        assert_eq!(
            record.sprites.other.official_artwork.front_default.as_deref(),
            Some("https://art/25.png")
        );
        assert_eq!(record.stat("attack"), Some(55));
        assert_eq!(record.stat("speed"), None);
    }

    #[test]
    fn null_base_experience_decodes() {
        let mut json = pikachu_json();
        json["base_experience"] = serde_json::Value::Null;
        let record: Result<Pokemon, _> = serde_json::from_value(json);
        assert!(record.is_ok_and(|r| r.base_experience.is_none()));
    }

    #[test]
    fn page_projection_extracts_locators() {
        let response = PageResponse {
            count: 1302,
            next: Some("https://pokeapi.co/api/v2/pokemon?offset=2&limit=2".to_owned()),
            previous: None,
            results: vec![
                NamedResource {
                    name: "bulbasaur".to_owned(),
                    url: "https://pokeapi.co/api/v2/pokemon/1/".to_owned(),
                },
                NamedResource {
                    name: "ivysaur".to_owned(),
                    url: String::new(),
                },
            ],
        };
        let page = Page::from(response);
        assert!(page.has_next);
        assert_eq!(page.total_count, 1302);
        assert_eq!(
            page.entries.first().map(|e| &e.locator),
            Some(&Locator::Id(PokemonId(1)))
        );
        // No usable URL segment: fall back to the entry name.
        assert_eq!(
            page.entries.get(1).map(|e| &e.locator),
            Some(&Locator::Name("ivysaur".to_owned()))
        );
    }

    #[test]
    fn cursor_advances_by_page_size() {
        let cursor = PageCursor::new(20);
        assert_eq!(cursor.advanced_from(0).offset, 20);
        assert_eq!(cursor.advanced_from(40).offset, 60);
        assert_eq!(PageCursor::new(20).advanced_from(u32::MAX).offset, u32::MAX);
    }
}
