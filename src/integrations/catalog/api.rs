// src/integrations/catalog/api.rs
//
// The seam between services and the catalog transport. Services depend
// on this trait, never on the HTTP client directly, so tests can swap in
// stub catalogs with controlled timing.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{MovieDetail, MovieId, MovieSummary, RatingEntry, UserId};
use crate::error::AppResult;
use crate::integrations::catalog::query::FilterQuery;
use crate::integrations::catalog::types::{ActorCount, Recommendations};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Ranked trending list; the landing page's primary feed.
    async fn trending(&self) -> AppResult<Vec<MovieSummary>>;

    /// Personalized recommendations for a signed-in user.
    async fn recommendations(&self, user_id: UserId) -> AppResult<Recommendations>;

    /// Most-featured actors across the catalog.
    async fn top_actors(&self) -> AppResult<Vec<ActorCount>>;

    async fn movies_by_actor(&self, actor: &str) -> AppResult<Vec<MovieSummary>>;

    async fn movies_by_genre(&self, genre: &str) -> AppResult<Vec<MovieSummary>>;

    /// Movies matching a canonical filter descriptor.
    async fn filter_movies(&self, query: &FilterQuery) -> AppResult<Vec<MovieSummary>>;

    /// Free-text search. The minimum query length is enforced by the
    /// search controller, not here.
    async fn search(&self, query: &str) -> AppResult<Vec<MovieSummary>>;

    async fn movie_details(&self, movie_id: MovieId) -> AppResult<MovieDetail>;

    async fn user_ratings(&self, user_id: UserId) -> AppResult<Vec<RatingEntry>>;

    async fn submit_rating(&self, user_id: UserId, movie_id: MovieId, rating: u8)
        -> AppResult<()>;

    /// Best-effort poster lookup by external catalog identifier, used by
    /// the search enrichment pass.
    async fn poster_lookup(&self, catalog_id: i64) -> AppResult<Option<String>>;
}
