// ============================================================================
// Binomial Coefficients
// Exact C(n, k) over u64 with overflow detection
// ============================================================================

use super::errors::{CountError, CountResult};

/// Compute the binomial coefficient C(n, k) exactly.
///
/// Uses the multiplicative recurrence `C(n, i+1) = C(n, i) * (n - i) / (i + 1)`
/// with multiply and divide interleaved: the running value after step `i` is
/// itself a binomial coefficient, so every division is exact and no factorial
/// is ever materialized.
///
/// # Arguments
/// - `n`: Size of the set being chosen from
/// - `k`: Number of elements chosen; any integer is accepted
///
/// # Returns
/// - `Ok(0)` when `k < 0` or `k > n` (nothing to choose)
/// - `Ok(1)` when `k == 0` or `k == n`
/// - `Err(Overflow)` when C(n, k) does not fit in a u64
///
/// # Example
/// ```
/// use good_numbers::numeric::binomial;
///
/// assert_eq!(binomial(52, 5), Ok(2_598_960));
/// assert_eq!(binomial(10, 3), binomial(10, 7));
/// assert_eq!(binomial(4, 7), Ok(0));
/// ```
pub fn binomial(n: u64, k: i64) -> CountResult<u64> {
    if k < 0 || k as u64 > n {
        return Ok(0);
    }
    let mut k = k as u64;
    if k == 0 || k == n {
        return Ok(1);
    }

    // Choosing k is choosing the n - k left out; take the shorter loop.
    if k > n - k {
        k = n - k;
    }

    let mut result: u64 = 1;
    for i in 0..k {
        // Widen for the product; the quotient is exactly C(n, i + 1). The
        // coefficients are increasing up to k <= n / 2, so the first quotient
        // past u64::MAX means the final result cannot fit either.
        let next = (result as u128) * ((n - i) as u128) / ((i + 1) as u128);
        if next > u64::MAX as u128 {
            return Err(CountError::Overflow);
        }
        result = next as u64;
    }

    Ok(result)
}
