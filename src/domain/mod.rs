// ============================================================================
// Domain Models Module
// Contains all core value objects and engine configuration
// ============================================================================

pub mod config;
pub mod distribution;
pub mod length;
pub mod report;

pub use config::{CounterConfig, CountingMethodKind, ENUMERATION_CEILING};
pub use distribution::DigitSumDistribution;
pub use length::DigitLength;
pub use report::CountReport;
