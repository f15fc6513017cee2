// ============================================================================
// Counting Algorithm Interface
// Defines the contract for pluggable digit-sum frequency sources
// ============================================================================

use crate::numeric::{CountError, CountResult};

/// Strategy pattern interface for digit-sum frequency computation
/// Implementations: ClosedForm (binomial inclusion-exclusion), Enumeration
pub trait CountingAlgorithm: Send + Sync {
    /// Count the `group_len`-digit sequences whose digits sum to `target_sum`
    ///
    /// Leading zeros are allowed; out-of-range target sums count zero
    /// sequences rather than erroring.
    ///
    /// # Arguments
    /// * `group_len` - Number of digits in each sequence
    /// * `target_sum` - The digit sum to count; any integer is accepted
    ///
    /// # Returns
    /// Number of matching sequences, or `Overflow` if it exceeds u64
    fn frequency(&self, group_len: u32, target_sum: i64) -> CountResult<u64>;

    /// Get the algorithm name for logging/metrics
    fn name(&self) -> &str;

    /// Optional: Count sequences whose leading digit is nonzero
    /// Default implementation subtracts the zero-led sequences, which are
    /// exactly the shorter sequences with the same sum
    fn leading_digit_frequency(&self, group_len: u32, target_sum: i64) -> CountResult<u64> {
        if group_len == 0 {
            return Ok(0);
        }

        // Prefixing a zero embeds every shorter sequence into the longer
        // ones, so `all >= zero_led` whenever `frequency` is consistent.
        let all = self.frequency(group_len, target_sum)?;
        let zero_led = self.frequency(group_len - 1, target_sum)?;
        all.checked_sub(zero_led).ok_or(CountError::Overflow)
    }
}
