// src/events/handlers/session_handler.rs
//
// Session lifecycle wiring.
//
// The ratings cache is the only per-user state the engine owns; it must
// be emptied synchronously when the session ends so nothing leaks into a
// subsequent anonymous or different-user session.

use std::sync::Arc;

use crate::events::types::SessionEnded;
use crate::events::EventBus;
use crate::services::RatingsCache;

/// Register the handlers that react to session lifecycle events.
pub fn register_session_handlers(bus: &EventBus, ratings: Arc<RatingsCache>) {
    bus.subscribe::<SessionEnded, _>(move |event| {
        log::debug!("session for user {} ended; clearing ratings", event.user_id);
        ratings.clear();
    });
}
