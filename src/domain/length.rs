// ============================================================================
// Digit Length
// Validated total digit count for good-number queries
// ============================================================================

use crate::numeric::{CountError, CountResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Total digit count of the numbers being counted.
///
/// A good number splits into two equal halves, so the total must be even and
/// at least 2. The upper bound is the 64-bit crossover: the count for 22
/// digits is roughly 2.9 × 10^20, past `u64::MAX`, so 20 is the largest total
/// this crate can answer exactly.
///
/// # Example
/// ```
/// use good_numbers::domain::DigitLength;
///
/// let length = DigitLength::new(6).unwrap();
/// assert_eq!(length.total(), 6);
/// assert_eq!(length.half(), 3);
/// assert_eq!(length.max_half_sum(), 27);
///
/// assert!(DigitLength::new(7).is_err());
/// assert!(DigitLength::new(22).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitLength(u32);

impl DigitLength {
    /// Shortest supported length (one digit per half)
    pub const MIN: Self = Self(2);

    /// Longest length whose good-number count fits in a u64
    pub const MAX: Self = Self(20);

    /// Validate a total digit count.
    ///
    /// # Errors
    /// - `OddDigitCount` when the total cannot split into two equal halves
    /// - `DigitCountTooSmall` / `DigitCountTooLarge` when outside `MIN..=MAX`
    pub fn new(total: u32) -> CountResult<Self> {
        if total % 2 != 0 {
            return Err(CountError::OddDigitCount { digits: total });
        }
        if total < Self::MIN.0 {
            return Err(CountError::DigitCountTooSmall { digits: total });
        }
        if total > Self::MAX.0 {
            return Err(CountError::DigitCountTooLarge {
                digits: total,
                max: Self::MAX.0,
            });
        }
        Ok(Self(total))
    }

    /// Total number of digits.
    #[inline]
    pub const fn total(self) -> u32 {
        self.0
    }

    /// Digits per half.
    #[inline]
    pub const fn half(self) -> u32 {
        self.0 / 2
    }

    /// Largest digit sum one half can reach (all nines).
    #[inline]
    pub const fn max_half_sum(self) -> i64 {
        9 * (self.0 / 2) as i64
    }
}

impl fmt::Display for DigitLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_lengths() {
        let length = DigitLength::new(6).unwrap();
        assert_eq!(length.total(), 6);
        assert_eq!(length.half(), 3);
        assert_eq!(length.max_half_sum(), 27);

        assert_eq!(DigitLength::new(2).unwrap(), DigitLength::MIN);
        assert_eq!(DigitLength::new(20).unwrap(), DigitLength::MAX);
    }

    #[test]
    fn test_odd_totals_rejected() {
        for total in [1, 3, 7, 19] {
            assert_eq!(
                DigitLength::new(total),
                Err(CountError::OddDigitCount { digits: total })
            );
        }
    }

    #[test]
    fn test_out_of_range_totals_rejected() {
        assert_eq!(
            DigitLength::new(0),
            Err(CountError::DigitCountTooSmall { digits: 0 })
        );
        assert_eq!(
            DigitLength::new(22),
            Err(CountError::DigitCountTooLarge { digits: 22, max: 20 })
        );
        assert_eq!(
            DigitLength::new(100),
            Err(CountError::DigitCountTooLarge { digits: 100, max: 20 })
        );
    }

    #[test]
    fn test_ordering_and_display() {
        assert!(DigitLength::new(4).unwrap() < DigitLength::new(6).unwrap());
        assert_eq!(DigitLength::new(10).unwrap().to_string(), "10");
    }
}
