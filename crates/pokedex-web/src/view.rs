//! Presentation models built from controller state.
//!
//! Everything the page shows is computed here from the controller
//! snapshots and the display functions, so templates and JSON clients
//! see the same values. The visibility rules of the catalog section
//! (spinner, empty notice, load-more button) live in
//! [`CatalogView::compose`].

use pokedex_core::display;
use pokedex_core::{DetailState, ListState, SearchState};
use pokedex_types::{ApiError, LoadingState, Locator, Pokemon, PokemonId};
use serde::Serialize;

/// Stats shown on a card, in display order.
pub const CARD_STATS: [&str; 3] = ["hp", "attack", "defense"];

/// Which controller feeds the catalog section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// The paginated list.
    #[default]
    Browse,
    /// Name search results.
    Search,
}

impl ViewMode {
    /// Mode selected by a committed search term.
    pub fn for_term(term: &str) -> Self {
        if term.trim().is_empty() {
            Self::Browse
        } else {
            Self::Search
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A type badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeBadge {
    /// Raw type name.
    pub name: String,
    /// Localized label.
    pub label: String,
    /// Background color.
    pub color: &'static str,
}

/// One stat with its share of the stat maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatBar {
    /// Raw stat name.
    pub name: String,
    /// Localized label.
    pub label: String,
    /// Base value.
    pub value: u32,
    /// Highest known base value for the stat.
    pub max: u32,
    /// `value` as a percentage of `max`.
    pub percentage: f64,
}

impl StatBar {
    fn new(record: &Pokemon, name: &str) -> Self {
        Self {
            name: name.to_owned(),
            label: display::stat_label(name).to_owned(),
            value: display::stat_value(record, name),
            max: display::stat_max(name),
            percentage: display::stat_percentage(record, name),
        }
    }
}

/// A card in the catalog grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    /// Record id.
    pub id: PokemonId,
    /// Formatted id (`#025`).
    pub number: String,
    /// Raw name, used as image alt text and lookup key.
    pub name: String,
    /// Capitalized name.
    pub display_name: String,
    /// Official artwork, falling back to the front sprite.
    pub image: Option<String>,
    /// Front sprite, used when the artwork fails to load.
    pub sprite: Option<String>,
    /// Type badges in slot order.
    pub types: Vec<TypeBadge>,
    /// The [`CARD_STATS`] of the record.
    pub stats: Vec<StatBar>,
}

impl From<&Pokemon> for CardView {
    fn from(record: &Pokemon) -> Self {
        Self {
            id: record.id,
            number: display::format_id(record.id),
            name: record.name.clone(),
            display_name: display::display_name(&record.name),
            image: display::artwork_url(record).map(str::to_owned),
            sprite: record.sprites.front_default.clone(),
            types: record
                .types
                .iter()
                .map(|slot| TypeBadge {
                    name: slot.kind.name.clone(),
                    label: display::type_label(&slot.kind.name).to_owned(),
                    color: display::type_color(&slot.kind.name),
                })
                .collect(),
            stats: CARD_STATS
                .iter()
                .map(|name| StatBar::new(record, name))
                .collect(),
        }
    }
}

/// An ability row in the detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbilityView {
    /// Raw ability name.
    pub name: String,
    /// Localized label.
    pub label: String,
    /// Whether this is the record's hidden ability.
    pub hidden: bool,
}

/// The detail panel for the selected record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    /// Card header data.
    pub card: CardView,
    /// Formatted height.
    pub height: String,
    /// Formatted weight.
    pub weight: String,
    /// Experience granted when defeated.
    pub base_experience: Option<u32>,
    /// Every stat the record reports, in record order.
    pub stats: Vec<StatBar>,
    /// Abilities in slot order.
    pub abilities: Vec<AbilityView>,
}

impl From<&Pokemon> for DetailView {
    fn from(record: &Pokemon) -> Self {
        let mut abilities: Vec<_> = record.abilities.iter().collect();
        abilities.sort_by_key(|slot| slot.slot);

        Self {
            card: CardView::from(record),
            height: display::format_height(record.height),
            weight: display::format_weight(record.weight),
            base_experience: record.base_experience,
            stats: record
                .stats
                .iter()
                .map(|entry| StatBar::new(record, &entry.stat.name))
                .collect(),
            abilities: abilities
                .into_iter()
                .map(|slot| AbilityView {
                    name: slot.ability.name.clone(),
                    label: display::ability_label(&slot.ability.name).to_owned(),
                    hidden: slot.is_hidden,
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Controller snapshots
// ---------------------------------------------------------------------------

/// The paginated list as served by `GET /api/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    /// Loaded records.
    pub cards: Vec<CardView>,
    /// Lifecycle of the most recent load.
    pub loading: LoadingState,
    /// Failure of the most recent load.
    pub error: Option<ApiError>,
    /// Whether a further page exists.
    pub has_more: bool,
    /// Offset the next page starts at.
    pub offset: u32,
}

impl From<&ListState> for ListView {
    fn from(state: &ListState) -> Self {
        Self {
            cards: state.records.iter().map(CardView::from).collect(),
            loading: state.loading,
            error: state.error.clone(),
            has_more: state.has_more,
            offset: state.cursor.offset,
        }
    }
}

/// The search as served by `GET /api/search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchView {
    /// Zero or one matching card.
    pub cards: Vec<CardView>,
    /// Lifecycle of the most recent search.
    pub loading: LoadingState,
    /// Failure of the most recent search.
    pub error: Option<ApiError>,
    /// Normalized term of the most recent search.
    pub term: String,
}

impl From<&SearchState> for SearchView {
    fn from(state: &SearchState) -> Self {
        Self {
            cards: state.results.iter().map(CardView::from).collect(),
            loading: state.loading,
            error: state.error.clone(),
            term: state.term.clone(),
        }
    }
}

/// The selection as served by `GET /api/selection`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionView {
    /// What was selected.
    pub locator: Option<Locator>,
    /// The resolved record.
    pub detail: Option<Box<DetailView>>,
    /// Lifecycle of the lookup.
    pub loading: LoadingState,
    /// Failure of the lookup.
    pub error: Option<ApiError>,
}

impl From<&DetailState> for SelectionView {
    fn from(state: &DetailState) -> Self {
        Self {
            locator: state.locator.clone(),
            detail: state
                .record
                .as_ref()
                .map(|record| Box::new(DetailView::from(record))),
            loading: state.loading,
            error: state.error.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog section
// ---------------------------------------------------------------------------

/// The active catalog section with its visibility flags resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct CatalogView {
    /// Which controller the cards come from.
    pub mode: ViewMode,
    /// Cards to show.
    pub cards: Vec<CardView>,
    /// Whether the active controller is loading.
    pub loading: bool,
    /// Error banner content.
    pub error: Option<ApiError>,
    /// Large spinner: loading with nothing shown yet.
    pub show_spinner: bool,
    /// "Nothing found" notice: settled, nothing shown, no error.
    pub show_empty: bool,
    /// Load-more button: browsing, more available, not loading.
    pub show_load_more: bool,
    /// Small spinner under the grid: loading with cards already shown.
    pub show_loading_more: bool,
    /// Spinner in the search input.
    pub search_loading: bool,
}

impl CatalogView {
    /// Compose the section for `mode` from both controller snapshots.
    pub fn compose(mode: ViewMode, list: &ListState, search: &SearchState) -> Self {
        let (records, loading, error) = match mode {
            ViewMode::Browse => (&list.records, list.loading, &list.error),
            ViewMode::Search => (&search.results, search.loading, &search.error),
        };
        // A list that has never loaded is about to; treat it as loading.
        let unloaded = mode == ViewMode::Browse && loading == LoadingState::Idle;
        let loading = loading.is_loading();
        let pending = loading || unloaded;
        let empty = records.is_empty();

        Self {
            mode,
            cards: records.iter().map(CardView::from).collect(),
            loading,
            error: error.clone(),
            show_spinner: pending && empty,
            show_empty: !pending && empty && error.is_none(),
            show_load_more: mode == ViewMode::Browse && list.has_more && !pending,
            show_loading_more: loading && !empty,
            search_loading: search.loading.is_loading(),
        }
    }
}
