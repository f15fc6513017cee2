// ============================================================================
// Counter Factory
// Creates counting engines with proper configuration
// ============================================================================

use crate::domain::config::{CounterConfig, CountingMethodKind};
use crate::engine::{ClosedForm, Enumeration, GoodNumberCounter};
use crate::interfaces::CountingAlgorithm;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a counting engine from configuration
///
/// # Arguments
/// * `config` - Counter configuration
///
/// # Returns
/// * `Result<GoodNumberCounter, String>` - Configured counter or error
///
/// # Example
/// ```
/// use good_numbers::engine::factory::create_from_config;
/// use good_numbers::prelude::*;
///
/// let config = CounterConfig::closed_form();
/// let counter = create_from_config(config).unwrap();
/// assert_eq!(counter.algorithm_name(), "ClosedForm");
/// ```
pub fn create_from_config(config: CounterConfig) -> Result<GoodNumberCounter, String> {
    // Validate configuration first
    config.validate()?;

    // Create the counting algorithm based on configuration
    let algorithm = create_counting_algorithm(config.method);

    Ok(GoodNumberCounter::new(algorithm, config.max_total_digits))
}

/// Creates the appropriate counting algorithm from configuration
fn create_counting_algorithm(method: CountingMethodKind) -> Box<dyn CountingAlgorithm> {
    match method {
        CountingMethodKind::ClosedForm => Box::new(ClosedForm),
        CountingMethodKind::Enumeration => Box::new(Enumeration),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating counting engines with fluent API
///
/// # Example
/// ```
/// use good_numbers::engine::factory::GoodNumberCounterBuilder;
/// use good_numbers::prelude::*;
///
/// let counter = GoodNumberCounterBuilder::new()
///     .enumeration_counting()
///     .with_max_total_digits(8)
///     .build()
///     .unwrap();
///
/// assert_eq!(counter.count(DigitLength::new(4).unwrap()), Ok(615));
/// ```
pub struct GoodNumberCounterBuilder {
    config: CounterConfig,
}

impl GoodNumberCounterBuilder {
    /// Create a new builder with the closed-form defaults
    pub fn new() -> Self {
        Self {
            config: CounterConfig::default(),
        }
    }

    // ========================================================================
    // Counting Method Configuration
    // ========================================================================

    /// Configure closed-form counting (default)
    pub fn closed_form_counting(mut self) -> Self {
        self.config.method = CountingMethodKind::ClosedForm;
        self
    }

    /// Configure brute-force enumeration counting
    pub fn enumeration_counting(mut self) -> Self {
        self.config.method = CountingMethodKind::Enumeration;
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Lower the accepted digit ceiling
    pub fn with_max_total_digits(mut self, max_total_digits: u32) -> Self {
        self.config.max_total_digits = max_total_digits;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply the production closed-form configuration
    pub fn closed_form() -> Self {
        Self {
            config: CounterConfig::closed_form(),
        }
    }

    /// Apply the cross-checking enumeration configuration
    pub fn enumeration_oracle() -> Self {
        Self {
            config: CounterConfig::enumeration_oracle(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the counting engine
    pub fn build(self) -> Result<GoodNumberCounter, String> {
        create_from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CounterConfig {
        &self.config
    }
}

impl Default for GoodNumberCounterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
