// ============================================================================
// Count Report
// Timed record of one counting run
// ============================================================================

use super::DigitLength;
use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of one good-number count, with timing metadata.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CountReport {
    /// Digit length that was counted
    pub length: DigitLength,

    /// The good-number count
    pub count: u64,

    /// Name of the algorithm that produced the count
    pub algorithm: String,

    /// Wall time spent computing
    pub elapsed: Duration,

    /// When the computation finished
    pub computed_at: DateTime<Utc>,
}

impl CountReport {
    pub fn new(length: DigitLength, count: u64, algorithm: &str, elapsed: Duration) -> Self {
        Self {
            length,
            count,
            algorithm: algorithm.to_string(),
            elapsed,
            computed_at: Utc::now(),
        }
    }
}

impl fmt::Display for CountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Result: {} ({:.3} ms, {} digits, {})",
            self.count,
            self.elapsed.as_secs_f64() * 1000.0,
            self.length,
            self.algorithm
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_creation() {
        let length = DigitLength::new(6).unwrap();
        let report = CountReport::new(length, 50_412, "closed-form", Duration::from_micros(42));

        assert_eq!(report.length, length);
        assert_eq!(report.count, 50_412);
        assert_eq!(report.algorithm, "closed-form");
        assert!(report.computed_at <= Utc::now());
    }

    #[test]
    fn test_report_display() {
        let report = CountReport::new(
            DigitLength::new(6).unwrap(),
            50_412,
            "closed-form",
            Duration::from_millis(1),
        );

        let text = report.to_string();
        assert!(text.starts_with("Result: 50412 ("));
        assert!(text.contains("6 digits"));
        assert!(text.contains("closed-form"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_round_trips_through_json() {
        let report = CountReport::new(
            DigitLength::new(8).unwrap(),
            4_379_055,
            "closed-form",
            Duration::from_micros(17),
        );

        let json = serde_json::to_string(&report).unwrap();
        let back: CountReport = serde_json::from_str(&json).unwrap();

        assert_eq!(back.length, report.length);
        assert_eq!(back.count, report.count);
        assert_eq!(back.algorithm, report.algorithm);
        assert_eq!(back.elapsed, report.elapsed);
        assert_eq!(back.computed_at, report.computed_at);
    }
}
