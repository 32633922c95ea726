//! Secret number generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::domain::range::RangeConfig;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Source of secret numbers.
pub trait SecretSource: Send + Sync {
    /// Draw a value uniformly from `[range.min_range, range.max_range]`.
    ///
    /// `range` has already been validated by the caller.
    fn draw(&self, range: &RangeConfig) -> Result<i64, DomainError>;
}

/// ChaCha20 seeded from the operating system on every draw.
///
/// `random_range` samples by rejection, so every value in the range is
/// equally likely.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSecretSource;

impl SecretSource for OsSecretSource {
    fn draw(&self, range: &RangeConfig) -> Result<i64, DomainError> {
        let mut rng = ChaCha20Rng::try_from_os_rng().map_err(|e| {
            DomainError::infra(
                InfraErrorKind::EntropyUnavailable,
                format!("OS random source failed: {e}"),
            )
        })?;
        Ok(rng.random_range(range.min_range..=range.max_range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_stays_within_narrow_range() {
        let range = RangeConfig::new(0, 1);
        let mut seen = [false; 2];
        for _ in 0..500 {
            let v = OsSecretSource.draw(&range).unwrap();
            assert!(range.contains(v));
            seen[v as usize] = true;
        }
        assert!(seen[0] && seen[1], "both endpoints should be reachable");
    }

    #[test]
    fn test_draw_handles_full_width_range() {
        let range = RangeConfig::new(i64::MIN, i64::MAX);
        assert!(OsSecretSource.draw(&range).is_ok());
    }
}
