//! In-memory catalog source.
//!
//! [`MemoryCatalog`] implements [`CatalogSource`] over a fixed list of
//! records so the controllers and the web layer can be exercised end to
//! end without the remote API. Individual lookups can be made to fail or
//! to block on a gate, which is how supersession and fan-out failure are
//! driven deterministically in tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pokedex_client::CatalogSource;
use pokedex_types::{
    ApiError, Locator, NamedResource, Page, PageEntry, Pokemon, PokemonId, Sprites, StatEntry,
    TypeSlot,
};
use tokio::sync::Notify;

/// A catalog source backed by a vector of records in listing order.
///
/// Failure and gate keys are the record name for records that exist,
/// and the locator's path segment otherwise.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    records: Vec<Pokemon>,
    failing: Mutex<HashSet<String>>,
    page_failure: Mutex<Option<ApiError>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    page_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryCatalog {
    /// Create a catalog serving `records` in the given order.
    pub fn new(records: Vec<Pokemon>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Make detail lookups for `key` fail with a network error.
    pub fn fail_detail(&self, key: &str) {
        lock(&self.failing).insert(key.to_owned());
    }

    /// Make every page listing fail with `error`.
    pub fn fail_pages(&self, error: ApiError) {
        *lock(&self.page_failure) = Some(error);
    }

    /// Remove all configured failures.
    pub fn clear_failures(&self) {
        lock(&self.failing).clear();
        *lock(&self.page_failure) = None;
    }

    /// Block detail lookups for `key` until the returned gate is notified.
    ///
    /// Each `notify_one` releases one pending (or the next) lookup.
    pub fn gate(&self, key: &str) -> Arc<Notify> {
        Arc::clone(
            lock(&self.gates)
                .entry(key.to_owned())
                .or_insert_with(|| Arc::new(Notify::new())),
        )
    }

    /// Number of page listings requested so far.
    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }

    /// Number of detail lookups requested so far.
    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    fn find(&self, locator: &Locator) -> Option<&Pokemon> {
        self.records.iter().find(|record| match locator {
            Locator::Id(id) => record.id == *id,
            Locator::Name(name) => record.name.eq_ignore_ascii_case(name),
        })
    }
}

impl CatalogSource for MemoryCatalog {
    async fn fetch_page(&self, page_size: u32, offset: u32) -> Result<Page, ApiError> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        let failure = lock(&self.page_failure).clone();
        if let Some(error) = failure {
            return Err(error);
        }

        let start = usize::try_from(offset).unwrap_or(usize::MAX);
        let size = usize::try_from(page_size).unwrap_or(usize::MAX);
        let entries: Vec<PageEntry> = self
            .records
            .iter()
            .skip(start)
            .take(size)
            .map(|record| PageEntry {
                name: record.name.clone(),
                locator: record.locator(),
            })
            .collect();
        let end = start.saturating_add(size);

        Ok(Page {
            total_count: u32::try_from(self.records.len()).unwrap_or(u32::MAX),
            has_next: end < self.records.len(),
            entries,
        })
    }

    async fn fetch_detail(&self, locator: &Locator) -> Result<Pokemon, ApiError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let found = self.find(locator);
        let key = found.map_or_else(|| locator.to_string(), |record| record.name.clone());

        let gate = lock(&self.gates).get(&key).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let failing = lock(&self.failing).contains(&key);
        if failing {
            return Err(ApiError::network(format!(
                "connection reset while fetching {key}"
            )));
        }

        found
            .cloned()
            .ok_or_else(|| ApiError::status(404, "Request failed with status code 404"))
    }
}

/// Build a plausible record for fixtures.
///
/// Stats are derived from the id so records are distinguishable.
pub fn fixture_record(id: u32, name: &str, types: &[&str]) -> Pokemon {
    let stat = |stat_name: &str, base_stat: u32| StatEntry {
        base_stat,
        effort: 0,
        stat: NamedResource {
            name: stat_name.to_owned(),
            url: String::new(),
        },
    };
    let base = id.saturating_mul(3) % 200;

    Pokemon {
        id: PokemonId(id),
        name: name.to_owned(),
        height: id.saturating_add(3),
        weight: id.saturating_mul(10),
        base_experience: Some(base),
        sprites: Sprites {
            front_default: Some(format!("https://img.example/{id}.png")),
            ..Sprites::default()
        },
        types: types
            .iter()
            .zip(1u8..)
            .map(|(type_name, slot)| TypeSlot {
                slot,
                kind: NamedResource {
                    name: (*type_name).to_owned(),
                    url: String::new(),
                },
            })
            .collect(),
        stats: vec![
            stat("hp", base.saturating_add(20)),
            stat("attack", base.saturating_add(10)),
            stat("defense", base),
        ],
        abilities: Vec::new(),
    }
}
