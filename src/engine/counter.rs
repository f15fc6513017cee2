// ============================================================================
// Good Number Counter
// Core counting engine over pluggable digit-sum frequencies
// ============================================================================

use crate::domain::{CountReport, DigitLength, DigitSumDistribution};
use crate::engine::closed_form::ClosedForm;
use crate::interfaces::CountingAlgorithm;
use crate::numeric::{CountError, CountResult};
use std::time::Instant;
use tracing::debug;

/// Counting engine with pluggable frequency algorithm
///
/// A number is good when it has an even number of digits, no leading zero,
/// and its first half sums to the same value as its second half. The engine
/// never touches individual numbers: for every possible half sum it pairs
/// the count of valid left halves with the count of right halves.
pub struct GoodNumberCounter {
    /// Pluggable digit-sum frequency source
    algorithm: Box<dyn CountingAlgorithm>,

    /// Largest accepted total digit count
    max_total_digits: u32,
}

impl GoodNumberCounter {
    /// Create a new counter
    pub fn new(algorithm: Box<dyn CountingAlgorithm>, max_total_digits: u32) -> Self {
        Self {
            algorithm,
            max_total_digits,
        }
    }

    /// Count the good numbers with exactly `length` digits.
    ///
    /// For each half sum, left halves must start with a nonzero digit while
    /// right halves are unrestricted. The zero half sum needs no term: its
    /// only left half is all zeros, which the leading-digit rule already
    /// excludes.
    ///
    /// # Errors
    /// - `DigitCountTooLarge` when `length` exceeds this counter's ceiling
    /// - `Overflow` if any pairing escapes u64 range
    pub fn count(&self, length: DigitLength) -> CountResult<u64> {
        self.check_length(length)?;

        let half = length.half();
        let mut total: u64 = 0;

        for half_sum in 1..=length.max_half_sum() {
            let right = self.algorithm.frequency(half, half_sum)?;
            let left = self.algorithm.leading_digit_frequency(half, half_sum)?;

            let pairs = left.checked_mul(right).ok_or(CountError::Overflow)?;
            total = total.checked_add(pairs).ok_or(CountError::Overflow)?;
        }

        debug!(
            "Counted {} good numbers of length {} via {}",
            total,
            length,
            self.algorithm.name()
        );

        Ok(total)
    }

    /// Count equal-half-sum digit strings of `length` digits.
    ///
    /// Unlike [`count`](Self::count), leading zeros are allowed, so this is
    /// the classic lucky-ticket count: 55,252 for six digits against 50,412
    /// good numbers.
    pub fn count_balanced_strings(&self, length: DigitLength) -> CountResult<u64> {
        self.check_length(length)?;

        let half = length.half();
        let mut total: u64 = 0;

        for half_sum in 0..=length.max_half_sum() {
            let halves = self.algorithm.frequency(half, half_sum)?;
            let pairs = halves.checked_mul(halves).ok_or(CountError::Overflow)?;
            total = total.checked_add(pairs).ok_or(CountError::Overflow)?;
        }

        Ok(total)
    }

    /// Tabulate the digit-sum frequencies of one half of `length`.
    pub fn sum_distribution(&self, length: DigitLength) -> CountResult<DigitSumDistribution> {
        self.check_length(length)?;

        let half = length.half();
        let mut counts = Vec::with_capacity(length.max_half_sum() as usize + 1);
        for sum in 0..=length.max_half_sum() {
            counts.push(self.algorithm.frequency(half, sum)?);
        }

        Ok(DigitSumDistribution::new(half, counts))
    }

    /// Count with wall-clock timing attached.
    pub fn count_report(&self, length: DigitLength) -> CountResult<CountReport> {
        let started = Instant::now();
        let count = self.count(length)?;
        let elapsed = started.elapsed();

        Ok(CountReport::new(
            length,
            count,
            self.algorithm.name(),
            elapsed,
        ))
    }

    /// Name of the plugged-in algorithm (for logging/metrics)
    pub fn algorithm_name(&self) -> &str {
        self.algorithm.name()
    }

    /// Largest total digit count this counter accepts
    pub fn max_total_digits(&self) -> u32 {
        self.max_total_digits
    }

    fn check_length(&self, length: DigitLength) -> CountResult<()> {
        if length.total() > self.max_total_digits {
            return Err(CountError::DigitCountTooLarge {
                digits: length.total(),
                max: self.max_total_digits,
            });
        }
        Ok(())
    }
}

impl Default for GoodNumberCounter {
    fn default() -> Self {
        Self::new(Box::new(ClosedForm), DigitLength::MAX.total())
    }
}

/// Count the good numbers with `total_digits` digits.
///
/// Convenience entry point over the closed-form engine with the full
/// supported digit range.
///
/// # Example
/// ```
/// use good_numbers::engine::count_good_numbers;
///
/// assert_eq!(count_good_numbers(2), Ok(9));
/// assert_eq!(count_good_numbers(6), Ok(50_412));
/// assert!(count_good_numbers(7).is_err());
/// ```
pub fn count_good_numbers(total_digits: u32) -> CountResult<u64> {
    let length = DigitLength::new(total_digits)?;
    GoodNumberCounter::default().count(length)
}
