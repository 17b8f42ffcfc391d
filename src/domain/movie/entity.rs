// src/domain/movie/entity.rs
use serde::{Deserialize, Serialize};

use crate::domain::MovieId;

/// A movie as it appears in list feeds (trending, rows, search results).
///
/// Produced by a fetch response and never mutated locally, with one
/// exception: the search enrichment pass may fill in a missing
/// `poster_url` after the fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Internal immutable identifier
    pub id: MovieId,

    pub title: String,

    pub release_year: Option<i32>,

    /// Ordered genre labels; small, may repeat across movies
    pub genres: Vec<String>,

    /// Absent means the renderer falls back to a placeholder
    pub poster_url: Option<String>,

    /// Billed cast, most prominent first
    pub actors: Vec<String>,

    /// External catalog identifier, used for best-effort poster lookup
    pub catalog_id: Option<i64>,

    /// Present only in personalized (recommendation) contexts, 0.0..=5.0
    pub predicted_rating: Option<f32>,
}

impl MovieSummary {
    pub fn primary_genre(&self) -> Option<&str> {
        self.genres.first().map(String::as_str)
    }
}

/// Full detail for one movie, fetched lazily by identifier when the
/// overlay opens. Not cached across overlay sessions; each open
/// re-fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: MovieId,
    pub title: String,
    pub release_year: Option<i32>,
    pub genres: Vec<String>,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    /// Runtime in minutes
    pub runtime: Option<u32>,
    /// Short certification code, e.g. "PG-13"
    pub certification: Option<String>,
    pub trailer_url: Option<String>,
}
