// src/integrations/catalog/query.rs
//
// Query Encoder: filter criteria -> canonical request descriptor.
//
// Pure translation, no network or state side effects. A field is encoded
// only when it differs from its unset default, which keeps requests
// minimal and cache-friendly server-side. Keys are held in a BTreeMap so
// two equal criteria always produce the identical descriptor regardless
// of mutation order.

use std::collections::BTreeMap;

use crate::domain::{FilterCriteria, MAX_YEAR, MIN_YEAR};

const KEY_ACTOR: &str = "actor";
const KEY_GENRES: &str = "genres";
const KEY_MIN_RATING: &str = "min_rating";
const KEY_YEAR_MAX: &str = "year_max";
const KEY_YEAR_MIN: &str = "year_min";

/// Canonical, order-independent descriptor for the filtered-movies
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    params: BTreeMap<&'static str, String>,
}

impl FilterQuery {
    pub fn encode(criteria: &FilterCriteria) -> Self {
        let mut params = BTreeMap::new();

        if !criteria.genres().is_empty() {
            // BTreeSet iteration is sorted, so the joined token is
            // independent of selection order
            let joined = criteria
                .genres()
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(",");
            params.insert(KEY_GENRES, joined);
        }

        let (year_min, year_max) = criteria.year_range();
        if year_min != MIN_YEAR {
            params.insert(KEY_YEAR_MIN, year_min.to_string());
        }
        if year_max != MAX_YEAR {
            params.insert(KEY_YEAR_MAX, year_max.to_string());
        }

        if criteria.min_rating() > 0 {
            params.insert(KEY_MIN_RATING, criteria.min_rating().to_string());
        }

        if let Some(actor) = criteria.actor() {
            params.insert(KEY_ACTOR, actor.to_string());
        }

        Self { params }
    }

    /// Rebuild criteria from a descriptor. Unknown keys are ignored;
    /// malformed numerics fall back to the unset default. Year bounds are
    /// re-clamped by the criteria mutators, so a hand-made inverted range
    /// is repaired rather than rejected.
    pub fn decode(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();

        if let Some(joined) = self.params.get(KEY_GENRES) {
            for genre in joined.split(',').filter(|g| !g.is_empty()) {
                criteria.toggle_genre(genre);
            }
        }
        if let Some(year) = self.params.get(KEY_YEAR_MIN).and_then(|v| v.parse().ok()) {
            criteria.set_year_min(year);
        }
        if let Some(year) = self.params.get(KEY_YEAR_MAX).and_then(|v| v.parse().ok()) {
            criteria.set_year_max(year);
        }
        if let Some(rating) = self.params.get(KEY_MIN_RATING).and_then(|v| v.parse().ok()) {
            criteria.set_min_rating(rating);
        }
        if let Some(actor) = self.params.get(KEY_ACTOR) {
            criteria.set_actor(actor);
        }

        criteria
    }

    /// Key/value pairs in canonical (key-sorted) order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
