// src/domain/rating.rs
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, MovieId};

/// One user's rating of one movie. Absence of an entry means unrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub movie_id: MovieId,
    pub rating: u8,
}

impl RatingEntry {
    pub fn new(movie_id: MovieId, rating: u8) -> Self {
        Self { movie_id, rating }
    }
}

/// Submitted ratings are whole stars, 1 through 5.
pub fn validate_rating(value: u8) -> DomainResult<()> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::RatingOutOfRange(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ratings() {
        for value in 1..=5 {
            assert!(validate_rating(value).is_ok());
        }
    }

    #[test]
    fn test_zero_and_overflow_rejected() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }
}
