// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// Events are facts, not commands; they carry only the data needed to
// react and hold no business logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{MovieId, UserId};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// SESSION EVENTS
// ============================================================================

/// Emitted when the auth collaborator reports a sign-in (or an existing
/// session is discovered on app entry).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: UserId,
    pub username: String,
}

impl SessionStarted {
    pub fn new(user_id: UserId, username: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            username,
        }
    }
}

impl DomainEvent for SessionStarted {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "SessionStarted"
    }
}

/// Emitted on sign-out. Handlers use this to purge per-user state so no
/// artifacts leak into a subsequent anonymous or different-user session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEnded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: UserId,
}

impl SessionEnded {
    pub fn new(user_id: UserId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
        }
    }
}

impl DomainEvent for SessionEnded {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "SessionEnded"
    }
}

// ============================================================================
// RATINGS EVENTS
// ============================================================================

/// Emitted after the ratings cache is wholesale-replaced from the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingsLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: UserId,
    pub entry_count: usize,
}

impl RatingsLoaded {
    pub fn new(user_id: UserId, entry_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            entry_count,
        }
    }
}

impl DomainEvent for RatingsLoaded {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "RatingsLoaded"
    }
}

/// Emitted the moment a rating is applied optimistically, before the
/// write settles. Every rendered rating control for the movie reacts to
/// this, which is what keeps independently-rendered cards consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingSubmitted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: u8,
}

impl RatingSubmitted {
    pub fn new(user_id: UserId, movie_id: MovieId, rating: u8) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            movie_id,
            rating,
        }
    }
}

impl DomainEvent for RatingSubmitted {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "RatingSubmitted"
    }
}

/// Emitted when the ratings cache is emptied on session end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingsCleared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl RatingsCleared {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for RatingsCleared {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for RatingsCleared {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "RatingsCleared"
    }
}

// ============================================================================
// OVERLAY EVENTS
// ============================================================================

/// Emitted when the detail overlay starts loading a target, including when
/// an open overlay is re-targeted at a different movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayOpened {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: MovieId,
}

impl OverlayOpened {
    pub fn new(movie_id: MovieId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
        }
    }
}

impl DomainEvent for OverlayOpened {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "OverlayOpened"
    }
}

/// Emitted when the overlay is dismissed through any trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayClosed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl OverlayClosed {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for OverlayClosed {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for OverlayClosed {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "OverlayClosed"
    }
}
