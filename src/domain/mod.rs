// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`.

pub mod filter;
pub mod movie;
pub mod rating;
pub mod user;

// Movie Domain
pub use movie::{MovieDetail, MovieSummary};

// Filter Domain
pub use filter::{validate_criteria, FilterCriteria, GENRES, MAX_YEAR, MIN_YEAR};

// Rating Domain
pub use rating::{validate_rating, RatingEntry};

// User Session (facts from the external auth collaborator)
pub use user::UserSession;

/// Movie identifiers are integers assigned by the catalog; immutable.
pub type MovieId = i64;

/// User identifiers come from the auth collaborator.
pub type UserId = i64;

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Rating {0} outside the valid range 1..=5")]
    RatingOutOfRange(u8),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
