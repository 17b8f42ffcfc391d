// src/domain/filter/invariants.rs
use super::entity::{FilterCriteria, MAX_YEAR, MIN_YEAR};
use crate::domain::{DomainError, DomainResult};

/// Validates all FilterCriteria invariants.
/// The mutators keep these rules by construction; use this to check
/// criteria arriving from outside the mutator API.
pub fn validate_criteria(criteria: &FilterCriteria) -> DomainResult<()> {
    let (min, max) = criteria.year_range();
    if min > max {
        return Err(DomainError::InvariantViolation(format!(
            "Year range inverted: {} > {}",
            min, max
        )));
    }
    if min < MIN_YEAR || max > MAX_YEAR {
        return Err(DomainError::InvariantViolation(format!(
            "Year range {}..{} outside bounds {}..{}",
            min, max, MIN_YEAR, MAX_YEAR
        )));
    }
    if criteria.min_rating() > 5 {
        return Err(DomainError::InvariantViolation(format!(
            "Minimum rating {} above 5",
            criteria.min_rating()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria_valid() {
        assert!(validate_criteria(&FilterCriteria::default()).is_ok());
    }

    #[test]
    fn test_setting_min_is_clamped_down_to_max() {
        let mut criteria = FilterCriteria::new();
        criteria.set_year_max(2000);
        criteria.set_year_min(2010);
        assert_eq!(criteria.year_range(), (2000, 2000));
        assert!(validate_criteria(&criteria).is_ok());
    }

    #[test]
    fn test_setting_max_is_clamped_up_to_min() {
        let mut criteria = FilterCriteria::new();
        criteria.set_year_min(2010);
        criteria.set_year_max(1995);
        assert_eq!(criteria.year_range(), (2010, 2010));
        assert!(validate_criteria(&criteria).is_ok());
    }

    #[test]
    fn test_years_clamped_to_fixed_bounds() {
        let mut criteria = FilterCriteria::new();
        criteria.set_year_min(1900);
        criteria.set_year_max(2100);
        assert_eq!(criteria.year_range(), (MIN_YEAR, MAX_YEAR));
    }

    #[test]
    fn test_invariant_holds_regardless_of_mutation_order() {
        let mut criteria = FilterCriteria::new();
        for (set_min, year) in [(true, 2015), (false, 1990), (true, 1985), (false, 2020)] {
            if set_min {
                criteria.set_year_min(year);
            } else {
                criteria.set_year_max(year);
            }
            let (min, max) = criteria.year_range();
            assert!(min <= max, "inverted after setting {}", year);
        }
    }

    #[test]
    fn test_genre_toggle_is_involutive() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_genre("Drama");
        assert!(criteria.genres().contains("Drama"));
        criteria.toggle_genre("Drama");
        assert!(criteria.genres().is_empty());
    }

    #[test]
    fn test_whitespace_actor_is_unset() {
        let mut criteria = FilterCriteria::new();
        criteria.set_actor("   ");
        assert_eq!(criteria.actor(), None);
        criteria.set_actor("  Tom Hanks ");
        assert_eq!(criteria.actor(), Some("Tom Hanks"));
    }

    #[test]
    fn test_min_rating_toggle_clears_active_value() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_min_rating(4);
        assert_eq!(criteria.min_rating(), 4);
        criteria.toggle_min_rating(4);
        assert_eq!(criteria.min_rating(), 0);
    }
}
