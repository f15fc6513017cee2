// ============================================================================
// Counting Errors
// Error types for exact combinatorial counting operations
// ============================================================================

use std::fmt;

/// Errors that can occur during combinatorial counting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountError {
    /// Result exceeded u64::MAX
    Overflow,
    /// Total digit count cannot be split into two equal halves
    OddDigitCount { digits: u32 },
    /// Total digit count below the 2-digit minimum
    DigitCountTooSmall { digits: u32 },
    /// Total digit count above the largest length whose count fits in u64
    DigitCountTooLarge { digits: u32, max: u32 },
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            CountError::OddDigitCount { digits } => write!(
                f,
                "odd digit count {digits}: cannot split into two equal halves"
            ),
            CountError::DigitCountTooSmall { digits } => {
                write!(f, "digit count {digits} is below the minimum of 2")
            },
            CountError::DigitCountTooLarge { digits, max } => write!(
                f,
                "digit count {digits} exceeds the supported maximum of {max}"
            ),
        }
    }
}

impl std::error::Error for CountError {}

/// Result type alias for counting operations
pub type CountResult<T> = Result<T, CountError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CountError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
        assert_eq!(
            CountError::OddDigitCount { digits: 7 }.to_string(),
            "odd digit count 7: cannot split into two equal halves"
        );
        assert_eq!(
            CountError::DigitCountTooLarge { digits: 24, max: 20 }.to_string(),
            "digit count 24 exceeds the supported maximum of 20"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CountError::Overflow, CountError::Overflow);
        assert_ne!(
            CountError::Overflow,
            CountError::OddDigitCount { digits: 3 }
        );
        assert_eq!(
            CountError::DigitCountTooSmall { digits: 0 },
            CountError::DigitCountTooSmall { digits: 0 }
        );
    }
}
