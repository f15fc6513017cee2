// ============================================================================
// Good Numbers Library
// Closed-form counting of balanced digit-sum numbers with pluggable algorithms
// ============================================================================

//! # Good Numbers
//!
//! A counting engine for "good numbers": decimal numbers with an even number
//! of digits, no leading zero, whose first half of digits sums to the same
//! value as the second half.
//!
//! ## Features
//!
//! - **Closed-form counting** via binomial coefficients with
//!   inclusion-exclusion; cost scales with distinct digit sums, never with
//!   the `10^n` candidate numbers
//! - **Pluggable counting algorithms** (ClosedForm, Enumeration oracle)
//! - **Exact integer arithmetic** with checked overflow, no floats
//! - **Validated inputs** so every answer is exact or an explicit error
//!
//! ## Example
//!
//! ```rust
//! use good_numbers::prelude::*;
//!
//! // Of the six-digit numbers 100000..=999999, how many have
//! // digit1 + digit2 + digit3 == digit4 + digit5 + digit6?
//! assert_eq!(count_good_numbers(6), Ok(50_412));
//!
//! // The same engine with the leading-zero restriction lifted gives the
//! // classic lucky-ticket count.
//! let counter = GoodNumberCounter::default();
//! let length = DigitLength::new(6).unwrap();
//! assert_eq!(counter.count_balanced_strings(length), Ok(55_252));
//!
//! // Half-sum frequencies behind the count are available directly.
//! let distribution = counter.sum_distribution(length).unwrap();
//! assert_eq!(distribution.frequency_of(10), 63);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CountReport, CounterConfig, CountingMethodKind, DigitLength, DigitSumDistribution,
    };
    pub use crate::engine::{
        count_good_numbers, create_from_config, ClosedForm, Enumeration, GoodNumberCounter,
        GoodNumberCounterBuilder,
    };
    pub use crate::interfaces::CountingAlgorithm;
}
