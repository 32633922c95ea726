//! Configured guessing range.

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// Inclusive bounds `[min_range, max_range]` for both secret and guesses.
///
/// The type does not enforce `min_range < max_range`: configuration can be
/// replaced at runtime, so validity is checked where a secret is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    pub min_range: i64,
    pub max_range: i64,
}

impl RangeConfig {
    pub const fn new(min_range: i64, max_range: i64) -> Self {
        Self {
            min_range,
            max_range,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min_range < self.max_range
    }

    /// Returns `self` if a secret can be drawn from it.
    pub fn validated(self) -> Result<Self, DomainError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(DomainError::configuration(self.min_range, self.max_range))
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min_range && value <= self.max_range
    }

    /// Fails with `OutOfRange` when `guess` falls outside the bounds.
    pub fn check_guess(&self, guess: i64) -> Result<(), DomainError> {
        if self.contains(guess) {
            Ok(())
        } else {
            Err(DomainError::out_of_range(guess, self.min_range, self.max_range))
        }
    }
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self::new(1, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_bounds_are_invalid() {
        let range = RangeConfig::new(50, 50);
        assert!(!range.is_valid());
        assert!(matches!(
            range.validated(),
            Err(DomainError::Configuration { min: 50, max: 50 })
        ));
    }

    #[test]
    fn test_inverted_bounds_are_invalid() {
        assert!(!RangeConfig::new(10, 1).is_valid());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = RangeConfig::new(1, 100);
        assert!(range.contains(1));
        assert!(range.contains(100));
        assert!(!range.contains(0));
        assert!(!range.contains(101));
    }

    #[test]
    fn test_check_guess_reports_bounds() {
        let err = RangeConfig::new(1, 100).check_guess(101).unwrap_err();
        assert_eq!(
            err,
            DomainError::OutOfRange {
                guess: 101,
                min: 1,
                max: 100
            }
        );
        assert!(err.to_string().contains("between 1 and 100"));
    }
}
