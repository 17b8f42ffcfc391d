// src/services/overlay_service.rs
//
// Shared detail overlay, modeled as an explicit state machine.
//
// Exactly one overlay session exists process-wide. Opening a new target
// while one is loading or open replaces it (no queuing, no stacking);
// the superseded fetch is dropped on arrival via the slot token. Every
// dismissal trigger (close control, backdrop, cancel key) routes through
// the single `close` transition.

use std::sync::{Arc, RwLock};

use crate::domain::{MovieDetail, MovieId};
use crate::events::{EventBus, OverlayClosed, OverlayOpened};
use crate::infrastructure::RequestSlot;
use crate::integrations::catalog::CatalogApi;

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayState {
    Closed,
    Loading {
        movie_id: MovieId,
    },
    /// `detail: None` is a degraded but valid open state: the fetch
    /// failed, and the shell renders whatever identifier-level info it
    /// already had from the triggering list item.
    Open {
        movie_id: MovieId,
        detail: Option<MovieDetail>,
    },
}

pub struct OverlayEngine {
    api: Arc<dyn CatalogApi>,
    event_bus: Arc<EventBus>,
    state: RwLock<OverlayState>,
    slot: RequestSlot,
}

impl OverlayEngine {
    pub fn new(api: Arc<dyn CatalogApi>, event_bus: Arc<EventBus>) -> Self {
        Self {
            api,
            event_bus,
            state: RwLock::new(OverlayState::Closed),
            slot: RequestSlot::new(),
        }
    }

    /// Open the overlay for `movie_id`, replacing any current session,
    /// and fetch its detail. Detail is never cached across sessions;
    /// each open re-fetches.
    pub async fn open(&self, movie_id: MovieId) {
        let token = self.slot.issue();
        *self.state.write().unwrap() = OverlayState::Loading { movie_id };
        self.event_bus.emit(OverlayOpened::new(movie_id));

        let fetched = self.api.movie_details(movie_id).await;

        let mut state = self.state.write().unwrap();
        if !self.slot.is_current(token) {
            // Superseded by a newer open or by close; this response must
            // not touch the displayed state
            return;
        }
        *state = match fetched {
            Ok(detail) => OverlayState::Open {
                movie_id,
                detail: Some(detail),
            },
            Err(err) => {
                log::warn!(
                    "detail fetch for movie {} failed, opening without detail: {}",
                    movie_id,
                    err
                );
                OverlayState::Open {
                    movie_id,
                    detail: None,
                }
            }
        };
    }

    /// Unconditionally transition to `Closed` and drop the detail
    /// payload, so reopening never flashes the previous entity's data.
    pub fn close(&self) {
        let mut state = self.state.write().unwrap();
        self.slot.invalidate();
        let was_open = !matches!(*state, OverlayState::Closed);
        *state = OverlayState::Closed;
        drop(state);

        if was_open {
            self.event_bus.emit(OverlayClosed::new());
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state.read().unwrap().clone()
    }

    /// The current target, regardless of loading progress.
    pub fn target(&self) -> Option<MovieId> {
        match *self.state.read().unwrap() {
            OverlayState::Closed => None,
            OverlayState::Loading { movie_id } | OverlayState::Open { movie_id, .. } => {
                Some(movie_id)
            }
        }
    }
}
