// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod counting_algorithm;

pub use counting_algorithm::CountingAlgorithm;
