// ============================================================================
// Digit Sum Distribution
// Frequency of every digit-sum total for one group length
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Frequency table of digit sums over all `group_len`-digit sequences.
///
/// Index `k` holds how many sequences of `group_len` digits (0-9 each,
/// leading zeros allowed) sum to exactly `k`; the table spans `0..=9 * n`.
/// The row is symmetric about its midpoint and its entries add up to `10^n`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitSumDistribution {
    group_len: u32,
    counts: Vec<u64>,
}

impl DigitSumDistribution {
    pub(crate) fn new(group_len: u32, counts: Vec<u64>) -> Self {
        debug_assert_eq!(counts.len() as u32, 9 * group_len + 1);
        Self { group_len, counts }
    }

    /// Number of digits in each counted sequence.
    #[inline]
    pub fn group_len(&self) -> u32 {
        self.group_len
    }

    /// Largest reachable digit sum (all nines).
    #[inline]
    pub fn max_sum(&self) -> i64 {
        9 * self.group_len as i64
    }

    /// Sequences whose digits sum to `sum`; zero outside `0..=max_sum`.
    pub fn frequency_of(&self, sum: i64) -> u64 {
        usize::try_from(sum)
            .ok()
            .and_then(|idx| self.counts.get(idx).copied())
            .unwrap_or(0)
    }

    /// Total number of sequences covered (always `10^group_len`).
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterate `(digit_sum, frequency)` pairs in ascending sum order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(sum, &count)| (sum as i64, count))
    }
}
