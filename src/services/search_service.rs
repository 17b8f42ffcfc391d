// src/services/search_service.rs
//
// Debounced search controller.
//
// Converts a live text stream into a sequence of at-most-one-in-flight
// search requests. Every keystroke supersedes the previous token; the
// request only fires once the debounce window elapses with the token
// still current, which guarantees the final request always reflects the
// final text even under rapid edits. Stale completions are discarded by
// comparing the token at apply time.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::task::JoinSet;

use crate::domain::MovieSummary;
use crate::infrastructure::{RequestSlot, SlotToken};
use crate::integrations::catalog::CatalogApi;

/// Queries shorter than this settle to `Idle` without a network call.
pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Pending,
    InFlight,
    Settled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub phase: SearchPhase,
    pub query: String,
    pub results: Vec<MovieSummary>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            phase: SearchPhase::Idle,
            query: String::new(),
            results: Vec::new(),
        }
    }
}

pub struct SearchController {
    api: Arc<dyn CatalogApi>,
    state: RwLock<SearchState>,
    slot: RequestSlot,
    debounce: Duration,
}

impl SearchController {
    pub fn new(api: Arc<dyn CatalogApi>, debounce: Duration) -> Self {
        Self {
            api,
            state: RwLock::new(SearchState::default()),
            slot: RequestSlot::new(),
            debounce,
        }
    }

    /// Feed one keystroke's worth of text. The shell calls this on every
    /// edit; each call supersedes the previous one.
    pub async fn input(&self, text: &str) {
        let token = self.slot.issue();
        let query = text.trim().to_string();

        if query.chars().count() < MIN_QUERY_LEN {
            self.store_if_current(token, |state| {
                state.phase = SearchPhase::Idle;
                state.query = query;
                state.results.clear();
            });
            return;
        }

        if !self.store_if_current(token, |state| {
            state.phase = SearchPhase::Pending;
            state.query = query.clone();
        }) {
            return;
        }

        tokio::time::sleep(self.debounce).await;
        if !self.store_if_current(token, |state| state.phase = SearchPhase::InFlight) {
            // A newer keystroke arrived during the debounce window
            return;
        }

        let results = match self.api.search(&query).await {
            Ok(results) => results,
            Err(err) => {
                // Search failures settle to empty results, they never
                // surface page-level
                log::warn!("search for {:?} failed: {}", query, err);
                Vec::new()
            }
        };

        if !self.store_if_current(token, |state| {
            state.phase = SearchPhase::Settled;
            state.results = results;
        }) {
            return;
        }

        self.enrich(token).await;
    }

    /// Best-effort poster enrichment for settled results: entries missing
    /// a poster but carrying an external catalog id get an independent
    /// lookup each. Per-item failures never affect sibling items, and the
    /// token guard keeps enrichment of superseded results from landing.
    async fn enrich(&self, token: SlotToken) {
        let targets: Vec<(usize, i64)> = {
            let state = self.state.read().unwrap();
            state
                .results
                .iter()
                .enumerate()
                .filter(|(_, movie)| movie.poster_url.is_none())
                .filter_map(|(idx, movie)| movie.catalog_id.map(|id| (idx, id)))
                .collect()
        };
        if targets.is_empty() {
            return;
        }

        let mut lookups = JoinSet::new();
        for (idx, catalog_id) in targets {
            let api = Arc::clone(&self.api);
            lookups.spawn(async move { (idx, api.poster_lookup(catalog_id).await) });
        }

        while let Some(joined) = lookups.join_next().await {
            let Ok((idx, outcome)) = joined else { continue };
            match outcome {
                Ok(Some(url)) => {
                    let applied = self.store_if_current(token, move |state| {
                        if let Some(entry) = state.results.get_mut(idx) {
                            entry.poster_url = Some(url);
                        }
                    });
                    if !applied {
                        return;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    log::debug!("poster enrichment failed: {}", err);
                }
            }
        }
    }

    /// Reset to `Idle` and supersede anything in flight.
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap();
        self.slot.invalidate();
        *state = SearchState::default();
    }

    pub fn state(&self) -> SearchState {
        self.state.read().unwrap().clone()
    }

    /// Apply `update` only if `token` is still current, checked under the
    /// state lock so a supersede cannot interleave.
    fn store_if_current<F>(&self, token: SlotToken, update: F) -> bool
    where
        F: FnOnce(&mut SearchState),
    {
        let mut state = self.state.write().unwrap();
        if !self.slot.is_current(token) {
            return false;
        }
        update(&mut state);
        true
    }
}
