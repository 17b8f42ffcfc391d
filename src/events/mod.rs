// src/events/mod.rs
//
// Internal Event System - Public API

pub mod bus;
pub mod handlers;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    OverlayClosed,
    OverlayOpened,
    RatingSubmitted,
    RatingsCleared,
    RatingsLoaded,
    SessionEnded,
    SessionStarted,
};

pub use bus::EventBus;

pub use handlers::register_session_handlers;
