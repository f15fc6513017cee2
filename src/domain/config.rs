// ============================================================================
// Counter Configuration
// Configuration for counting method and input ceiling
// ============================================================================

use super::DigitLength;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest total digit count the enumeration method accepts.
///
/// Enumeration walks every half-sequence, so its cost is 10^(digits / 2) per
/// frequency query; past twelve digits it stops being usable even as an
/// oracle.
pub const ENUMERATION_CEILING: u32 = 12;

// ============================================================================
// Counting Method
// ============================================================================

/// Selects how digit-sum frequencies are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CountingMethodKind {
    /// Closed-form frequencies via binomial coefficients with
    /// inclusion-exclusion; cost scales with the number of distinct digit
    /// sums, not with the number of candidate numbers.
    /// Use case: production counting at any supported length
    ClosedForm,

    /// Brute-force enumeration of every digit sequence.
    /// Use case: cross-checking the closed form at small lengths
    Enumeration,
}

// ============================================================================
// Complete Counter Configuration
// ============================================================================

/// Configuration for creating a good-number counter
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CounterConfig {
    /// Frequency computation method
    pub method: CountingMethodKind,

    /// Largest total digit count the counter will accept.
    /// Never above `DigitLength::MAX`; queries past the ceiling are rejected
    /// before any arithmetic runs.
    pub max_total_digits: u32,
}

impl CounterConfig {
    /// Create a new configuration with the full supported digit range
    pub fn new(method: CountingMethodKind) -> Self {
        Self {
            method,
            max_total_digits: DigitLength::MAX.total(),
        }
    }

    /// Builder method: Lower the accepted digit ceiling
    pub fn with_max_total_digits(mut self, max_total_digits: u32) -> Self {
        self.max_total_digits = max_total_digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_total_digits < DigitLength::MIN.total() {
            return Err(format!(
                "Digit ceiling must be at least {}",
                DigitLength::MIN.total()
            ));
        }

        if self.max_total_digits > DigitLength::MAX.total() {
            return Err(format!(
                "Digit ceiling cannot exceed {} (counts past that overflow u64)",
                DigitLength::MAX.total()
            ));
        }

        if self.method == CountingMethodKind::Enumeration
            && self.max_total_digits > ENUMERATION_CEILING
        {
            return Err(format!(
                "Enumeration cost is 10^(digits/2) per query; cap the ceiling at {}",
                ENUMERATION_CEILING
            ));
        }

        Ok(())
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self::new(CountingMethodKind::ClosedForm)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CounterConfig {
    /// Production configuration
    /// - Closed-form frequencies
    /// - Full supported digit range
    pub fn closed_form() -> Self {
        Self::new(CountingMethodKind::ClosedForm)
    }

    /// Cross-checking configuration
    /// - Brute-force enumeration
    /// - Ceiling lowered to keep every query fast
    pub fn enumeration_oracle() -> Self {
        Self::new(CountingMethodKind::Enumeration).with_max_total_digits(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = CounterConfig::new(CountingMethodKind::ClosedForm);

        assert_eq!(config.method, CountingMethodKind::ClosedForm);
        assert_eq!(config.max_total_digits, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CounterConfig::closed_form().with_max_total_digits(8);

        assert_eq!(config.max_total_digits, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let too_small = CounterConfig::closed_form().with_max_total_digits(0);
        assert!(too_small.validate().is_err());

        let too_large = CounterConfig::closed_form().with_max_total_digits(24);
        assert!(too_large.validate().is_err());

        let slow_oracle = CounterConfig::new(CountingMethodKind::Enumeration);
        assert!(slow_oracle.validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        let production = CounterConfig::closed_form();
        assert_eq!(production.method, CountingMethodKind::ClosedForm);
        assert!(production.validate().is_ok());

        let oracle = CounterConfig::enumeration_oracle();
        assert_eq!(oracle.method, CountingMethodKind::Enumeration);
        assert!(oracle.max_total_digits <= ENUMERATION_CEILING);
        assert!(oracle.validate().is_ok());
    }
}
