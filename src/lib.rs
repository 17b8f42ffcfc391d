// src/lib.rs
// MovieHub - client-side data orchestration engine for a movie
// discovery app
//
// Architecture:
// - Domain-centric: value objects and invariants live in `domain`
// - Event-driven: cross-cutting notifications go through `events`
// - Per-slot sequencing: superseded async responses are discarded, never
//   applied (`infrastructure::slot`)
// - The rendering shell is an external consumer; it holds an
//   `application::AppState` and observes service state

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod integrations;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_criteria,
    validate_rating,
    FilterCriteria,
    MovieDetail,
    MovieId,
    MovieSummary,
    RatingEntry,
    UserId,
    UserSession,
    GENRES,
    MAX_YEAR,
    MIN_YEAR,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    DomainEvent,
    EventBus,
    OverlayClosed,
    OverlayOpened,
    RatingSubmitted,
    RatingsCleared,
    RatingsLoaded,
    SessionEnded,
    SessionStarted,
};

// ============================================================================
// PUBLIC API - Services and wiring
// ============================================================================

pub use application::{AppState, ErrorResponse, ErrorType};
pub use config::{load_config, EngineConfig};
pub use integrations::catalog::{
    ActorCount, CatalogApi, FilterQuery, HttpCatalogClient, Recommendations,
};
pub use services::{
    ActorRow, GenreRow, HomeService, HomeState, OverlayEngine, OverlayState, PagePhase,
    RatingsCache, SearchController, SearchPhase, SearchState, SessionStore,
};
