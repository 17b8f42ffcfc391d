// src/services/ratings_service.rs
//
// Ratings cache: the single source of truth for every rendered rating
// control.
//
// Mutations are whole-map replaces or single-entry upserts under one
// lock, so a concurrently-rendering consumer can never observe a torn
// state. Lifecycle is tied to the signed-in session: populated on login
// or app entry, emptied synchronously on logout.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::{validate_rating, MovieId, RatingEntry, UserId};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, RatingSubmitted, RatingsCleared, RatingsLoaded};
use crate::integrations::catalog::CatalogApi;
use crate::services::session_service::SessionStore;

pub struct RatingsCache {
    entries: RwLock<HashMap<MovieId, u8>>,
    api: Arc<dyn CatalogApi>,
    session: Arc<SessionStore>,
    event_bus: Arc<EventBus>,
}

impl RatingsCache {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        session: Arc<SessionStore>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            api,
            session,
            event_bus,
        }
    }

    /// Fetch all rating entries for the user and replace the mapping
    /// wholesale. Idempotent: concurrent duplicate loads converge because
    /// the later response fully replaces, never merges.
    pub async fn load(&self, user_id: UserId) -> AppResult<Vec<RatingEntry>> {
        let fetched = self.api.user_ratings(user_id).await?;

        let map: HashMap<MovieId, u8> = fetched.iter().map(|e| (e.movie_id, e.rating)).collect();
        *self.entries.write().unwrap() = map;

        self.event_bus
            .emit(RatingsLoaded::new(user_id, fetched.len()));
        Ok(fetched)
    }

    /// Submit a rating: the local entry is set optimistically before the
    /// write is issued, so every card showing the movie updates at once.
    ///
    /// A failed write is reported through the returned error but the
    /// optimistic value is deliberately NOT rolled back; the next `load`
    /// reconciles against server truth.
    pub async fn submit(&self, movie_id: MovieId, value: u8) -> AppResult<()> {
        validate_rating(value)?;
        let user_id = self
            .session
            .current_user_id()
            .ok_or(AppError::Unauthenticated)?;

        self.entries.write().unwrap().insert(movie_id, value);
        self.event_bus
            .emit(RatingSubmitted::new(user_id, movie_id, value));

        match self.api.submit_rating(user_id, movie_id, value).await {
            Ok(()) => Ok(()),
            Err(err) => {
                log::warn!(
                    "rating write for movie {} failed, keeping optimistic value: {}",
                    movie_id,
                    err
                );
                Err(err)
            }
        }
    }

    /// Empty the mapping synchronously. Invoked on logout.
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
        self.event_bus.emit(RatingsCleared::new());
    }

    pub fn get(&self, movie_id: MovieId) -> Option<u8> {
        self.entries.read().unwrap().get(&movie_id).copied()
    }

    pub fn snapshot(&self) -> HashMap<MovieId, u8> {
        self.entries.read().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}
