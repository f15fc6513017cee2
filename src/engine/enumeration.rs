// ============================================================================
// Brute-Force Enumeration
// Reference counting by walking every digit sequence
// ============================================================================

use crate::domain::DigitLength;
use crate::interfaces::CountingAlgorithm;
use crate::numeric::CountResult;

/// Tally digit sums across all `10^group_len` sequences in one pass.
///
/// Returns two histograms indexed by digit sum: counts over every sequence,
/// and counts over the sequences whose leading digit is nonzero. One walk
/// serves every sum, which keeps end-to-end cross-checks affordable; calling
/// this past group length six or so stops being practical.
pub fn sum_histograms(group_len: u32) -> (Vec<u64>, Vec<u64>) {
    let size = 9 * group_len as usize + 1;
    let mut all = vec![0u64; size];
    let mut leading = vec![0u64; size];

    let mut digits = vec![0u8; group_len as usize];
    let mut sum = 0usize;

    loop {
        all[sum] += 1;
        if digits.first().is_some_and(|&d| d != 0) {
            leading[sum] += 1;
        }

        // Advance the odometer from the rightmost digit, tracking the sum
        // instead of re-adding all digits each step.
        let mut pos = digits.len();
        loop {
            if pos == 0 {
                return (all, leading);
            }
            pos -= 1;
            if digits[pos] < 9 {
                digits[pos] += 1;
                sum += 1;
                break;
            }
            digits[pos] = 0;
            sum -= 9;
        }
    }
}

/// Frequency of one digit sum by direct enumeration.
pub fn frequency_by_enumeration(group_len: u32, target_sum: i64) -> u64 {
    if target_sum < 0 || target_sum > 9 * group_len as i64 {
        return 0;
    }
    let (all, _) = sum_histograms(group_len);
    all[target_sum as usize]
}

/// Count good numbers end to end without any combinatorics.
///
/// Pairs the leading-digit histogram against the unrestricted one, exactly
/// the interview-style reference computation. Independent of the closed form
/// in every step, which is what makes it a useful oracle.
pub fn count_good_numbers_by_enumeration(length: DigitLength) -> u64 {
    let (all, leading) = sum_histograms(length.half());

    // Ceiling of DigitLength::MAX keeps every partial sum inside u64.
    all.iter()
        .zip(&leading)
        .map(|(&right, &left)| left * right)
        .sum()
}

/// Brute-force frequency source
///
/// Every call walks the whole sequence space, so plug this in only at
/// oracle sizes; `CounterConfig::enumeration_oracle` caps the ceiling
/// accordingly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Enumeration;

impl CountingAlgorithm for Enumeration {
    fn frequency(&self, group_len: u32, target_sum: i64) -> CountResult<u64> {
        Ok(frequency_by_enumeration(group_len, target_sum))
    }

    fn name(&self) -> &str {
        "Enumeration"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::closed_form::frequency;

    #[test]
    fn test_histograms_match_closed_form() {
        for group_len in 0..=4u32 {
            let (all, _) = sum_histograms(group_len);
            assert_eq!(all.len() as i64, 9 * group_len as i64 + 1);

            for (sum, &count) in all.iter().enumerate() {
                assert_eq!(
                    frequency(group_len, sum as i64),
                    Ok(count),
                    "group {} sum {}",
                    group_len,
                    sum
                );
            }
        }
    }

    #[test]
    fn test_leading_histogram_drops_zero_led_sequences() {
        for group_len in 1..=4u32 {
            let (all, leading) = sum_histograms(group_len);
            let (shorter, _) = sum_histograms(group_len - 1);

            for sum in 0..all.len() {
                let zero_led = shorter.get(sum).copied().unwrap_or(0);
                assert_eq!(
                    leading[sum],
                    all[sum] - zero_led,
                    "group {} sum {}",
                    group_len,
                    sum
                );
            }
        }
    }

    #[test]
    fn test_empty_group_histograms() {
        let (all, leading) = sum_histograms(0);
        assert_eq!(all, vec![1]);
        assert_eq!(leading, vec![0]);
    }

    #[test]
    fn test_end_to_end_counts() {
        // One histogram walk per length keeps even the 10-digit reference
        // affordable (10^5 sequences per half).
        let cases = [
            (2, 9),
            (4, 615),
            (6, 50_412),
            (8, 4_379_055),
            (10, 392_406_145),
        ];
        for (total, expected) in cases {
            let length = DigitLength::new(total).unwrap();
            assert_eq!(
                count_good_numbers_by_enumeration(length),
                expected,
                "{} digits",
                total
            );
        }
    }

    #[test]
    fn test_algorithm_trait_surface() {
        let algorithm = Enumeration;
        assert_eq!(algorithm.name(), "Enumeration");
        assert_eq!(algorithm.frequency(2, 9), Ok(10));
        assert_eq!(algorithm.frequency(2, 19), Ok(0));
        // Only "00" sums to zero and it is zero-led.
        assert_eq!(algorithm.leading_digit_frequency(2, 0), Ok(0));
    }
}
