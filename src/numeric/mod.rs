// ============================================================================
// Numeric Module
// Exact integer combinatorics primitives for digit-sum counting
// ============================================================================
//
// This module provides:
// - binomial: Exact C(n, k) over u64 with overflow detection
// - CountError: Error types for counting operations
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Overflow is reported, never wrapped into a plausible wrong answer

mod binomial;
mod errors;

pub use binomial::binomial;
pub use errors::{CountError, CountResult};
