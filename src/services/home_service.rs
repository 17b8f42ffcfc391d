// src/services/home_service.rs
//
// Page-level aggregator.
//
// Composes the independent feeds for the landing page into one coherent
// snapshot. The required batch (trending, and for a signed-in user
// recommendations and ratings) is issued concurrently and the page is
// Ready only once every member has settled, so the shell never renders a
// half-updated tree. Secondary feeds (top actors, per-genre rows, actor
// row) start after that and each update their own slot on arrival.

use std::sync::{Arc, RwLock};

use rand::Rng;
use tokio::task::JoinSet;

use crate::domain::MovieSummary;
use crate::error::AppResult;
use crate::infrastructure::{retry_fixed, RequestSlot, RetryPolicy};
use crate::integrations::catalog::{ActorCount, CatalogApi};
use crate::services::ratings_service::RatingsCache;
use crate::services::session_service::SessionStore;

/// Anonymous hero selection draws uniformly from this many top trending
/// entries, so the landing page doesn't open on the same poster every
/// time.
pub const HERO_POOL: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagePhase {
    Loading,
    Ready,
    /// Trending failed after exhausting retries. The shell renders a
    /// page-level failure state with a manual retry action.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenreRow {
    pub genre: String,
    pub movies: Vec<MovieSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActorRow {
    pub actor: String,
    pub movies: Vec<MovieSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    pub phase: PagePhase,
    pub hero: Option<MovieSummary>,
    pub trending: Vec<MovieSummary>,
    pub recommended: Vec<MovieSummary>,
    pub recommendation_basis: Option<String>,
    pub top_actors: Vec<ActorCount>,
    /// One row per requested genre, in request order. An empty row means
    /// nothing to show; the renderer omits it.
    pub genre_rows: Vec<GenreRow>,
    pub actor_row: Option<ActorRow>,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            phase: PagePhase::Loading,
            hero: None,
            trending: Vec::new(),
            recommended: Vec::new(),
            recommendation_basis: None,
            top_actors: Vec::new(),
            genre_rows: Vec::new(),
            actor_row: None,
        }
    }
}

enum SecondaryArrival {
    TopActors(AppResult<Vec<ActorCount>>),
    Genre(String, AppResult<Vec<MovieSummary>>),
}

pub struct HomeService {
    api: Arc<dyn CatalogApi>,
    ratings: Arc<RatingsCache>,
    session: Arc<SessionStore>,
    state: RwLock<HomeState>,
    actor_slot: RequestSlot,
    retry: RetryPolicy,
}

impl HomeService {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        ratings: Arc<RatingsCache>,
        session: Arc<SessionStore>,
    ) -> Self {
        Self {
            api,
            ratings,
            session,
            state: RwLock::new(HomeState::default()),
            actor_slot: RequestSlot::new(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn state(&self) -> HomeState {
        self.state.read().unwrap().clone()
    }

    /// Issue the required feeds as one concurrent batch and settle the
    /// page. Trending is the only fatal feed: it retries transient
    /// failures and, if still failing, flips the page to `Failed`.
    /// Recommendations and ratings are signed-in-only and tolerated.
    pub async fn load_initial(&self) -> AppResult<()> {
        *self.state.write().unwrap() = HomeState::default();
        let user_id = self.session.current_user_id();

        let trending_fut = retry_fixed(self.retry, || self.api.trending());
        let recommendations_fut = async {
            match user_id {
                Some(id) => Some(self.api.recommendations(id).await),
                None => None,
            }
        };
        let ratings_fut = async {
            match user_id {
                Some(id) => Some(self.ratings.load(id).await),
                None => None,
            }
        };

        let (trending, recommendations, ratings) =
            tokio::join!(trending_fut, recommendations_fut, ratings_fut);

        let trending = match trending {
            Ok(list) => list,
            Err(err) => {
                log::error!("trending feed failed after retries: {}", err);
                self.state.write().unwrap().phase = PagePhase::Failed {
                    reason: err.to_string(),
                };
                return Err(err);
            }
        };

        let (recommended, basis) = match recommendations {
            Some(Ok(recs)) => (recs.movies, recs.basis),
            Some(Err(err)) => {
                log::warn!("recommendations unavailable: {}", err);
                (Vec::new(), None)
            }
            None => (Vec::new(), None),
        };

        if let Some(Err(err)) = ratings {
            // Tolerated: cards simply render unrated until the next load
            log::warn!("ratings load failed: {}", err);
        }

        let hero = pick_hero(&trending, &recommended, user_id.is_some());

        let mut state = self.state.write().unwrap();
        state.trending = trending;
        state.recommended = recommended;
        state.recommendation_basis = basis;
        state.hero = hero;
        state.phase = PagePhase::Ready;
        Ok(())
    }

    /// Manual retry for the page-level failure state.
    pub async fn retry(&self) -> AppResult<()> {
        self.load_initial().await
    }

    /// Fan out the secondary feeds: the top-actors strip and one row per
    /// requested genre. Each fetch is independent; a slow genre never
    /// delays a fast one, and a failed one leaves its row empty.
    /// Call after the initial batch has settled.
    pub async fn load_secondary(&self, genres: &[&str]) {
        {
            let mut state = self.state.write().unwrap();
            state.top_actors.clear();
            state.genre_rows = genres
                .iter()
                .map(|genre| GenreRow {
                    genre: genre.to_string(),
                    movies: Vec::new(),
                })
                .collect();
        }

        let mut fetches: JoinSet<SecondaryArrival> = JoinSet::new();

        {
            let api = Arc::clone(&self.api);
            fetches.spawn(async move { SecondaryArrival::TopActors(api.top_actors().await) });
        }
        for genre in genres {
            let api = Arc::clone(&self.api);
            let genre = genre.to_string();
            fetches.spawn(async move {
                let outcome = api.movies_by_genre(&genre).await;
                SecondaryArrival::Genre(genre, outcome)
            });
        }

        while let Some(joined) = fetches.join_next().await {
            let Ok(arrival) = joined else { continue };
            match arrival {
                SecondaryArrival::TopActors(Ok(actors)) => {
                    self.state.write().unwrap().top_actors = actors;
                }
                SecondaryArrival::TopActors(Err(err)) => {
                    log::warn!("top actors feed failed: {}", err);
                }
                SecondaryArrival::Genre(genre, Ok(movies)) => {
                    let mut state = self.state.write().unwrap();
                    if let Some(row) = state.genre_rows.iter_mut().find(|r| r.genre == genre) {
                        row.movies = movies;
                    }
                }
                SecondaryArrival::Genre(genre, Err(err)) => {
                    log::warn!("genre row {:?} failed, omitting: {}", genre, err);
                }
            }
        }
    }

    /// Select (or clear) the actor filter. Selecting the already-active
    /// actor toggles the row off without a network call. A re-selection
    /// supersedes any in-flight fetch for the previous actor.
    pub async fn set_actor(&self, actor: Option<&str>) {
        let Some(name) = actor else {
            self.actor_slot.invalidate();
            self.state.write().unwrap().actor_row = None;
            return;
        };

        let active = {
            let state = self.state.read().unwrap();
            state.actor_row.as_ref().map(|row| row.actor.clone())
        };
        if active.as_deref() == Some(name) {
            self.actor_slot.invalidate();
            self.state.write().unwrap().actor_row = None;
            return;
        }

        let token = self.actor_slot.issue();
        let outcome = self.api.movies_by_actor(name).await;

        let mut state = self.state.write().unwrap();
        if !self.actor_slot.is_current(token) {
            // Superseded by a newer selection
            return;
        }
        match outcome {
            Ok(movies) => {
                state.actor_row = Some(ActorRow {
                    actor: name.to_string(),
                    movies,
                });
            }
            Err(err) => {
                log::warn!("actor row for {:?} failed: {}", name, err);
                state.actor_row = None;
            }
        }
    }
}

/// Featured-entity tie-break: a signed-in user with nonempty
/// recommendations gets `recommended[0]` deterministically; otherwise
/// pick uniformly among the top trending entries.
fn pick_hero(
    trending: &[MovieSummary],
    recommended: &[MovieSummary],
    signed_in: bool,
) -> Option<MovieSummary> {
    if signed_in {
        if let Some(first) = recommended.first() {
            return Some(first.clone());
        }
    }
    if trending.is_empty() {
        return None;
    }
    let pool = trending.len().min(HERO_POOL);
    let idx = rand::rng().random_range(0..pool);
    Some(trending[idx].clone())
}
