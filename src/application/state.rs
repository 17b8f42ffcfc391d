// src/application/state.rs

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::error::AppResult;
use crate::events::{register_session_handlers, EventBus};
use crate::integrations::catalog::{CatalogApi, HttpCatalogClient};
use crate::services::{
    HomeService, OverlayEngine, RatingsCache, SearchController, SessionStore,
};

/// Application state: the composition root the rendering shell holds.
/// All fields are Arc-wrapped for sharing across UI callbacks.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub session: Arc<SessionStore>,
    pub ratings: Arc<RatingsCache>,
    pub home: Arc<HomeService>,
    pub search: Arc<SearchController>,
    pub overlay: Arc<OverlayEngine>,
    /// Direct catalog handle for the filter surface: encode criteria with
    /// `FilterQuery::encode` and execute via `filter_movies`.
    pub catalog: Arc<dyn CatalogApi>,
}

impl AppState {
    /// Wire the engine against the real HTTP catalog.
    pub fn new(config: &EngineConfig) -> AppResult<Self> {
        let api: Arc<dyn CatalogApi> = Arc::new(HttpCatalogClient::new(config)?);
        Ok(Self::with_api(config, api))
    }

    /// Wire the engine against any catalog implementation. The seam the
    /// shell's integration tests use.
    pub fn with_api(config: &EngineConfig, api: Arc<dyn CatalogApi>) -> Self {
        let event_bus = Arc::new(EventBus::new());
        let session = Arc::new(SessionStore::new(Arc::clone(&event_bus)));

        let ratings = Arc::new(RatingsCache::new(
            Arc::clone(&api),
            Arc::clone(&session),
            Arc::clone(&event_bus),
        ));
        let home = Arc::new(
            HomeService::new(
                Arc::clone(&api),
                Arc::clone(&ratings),
                Arc::clone(&session),
            )
            .with_retry_policy(config.trending_retry),
        );
        let search = Arc::new(SearchController::new(Arc::clone(&api), config.debounce));
        let overlay = Arc::new(OverlayEngine::new(Arc::clone(&api), Arc::clone(&event_bus)));

        // Event wiring: logout purges per-user state
        register_session_handlers(&event_bus, Arc::clone(&ratings));

        Self {
            event_bus,
            session,
            ratings,
            home,
            search,
            overlay,
            catalog: api,
        }
    }
}
