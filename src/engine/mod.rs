// ============================================================================
// Engine Module
// Contains the core counting engine business logic
// ============================================================================

mod closed_form;
mod counter;
mod enumeration;

pub mod factory;

pub use closed_form::{frequency, ClosedForm};
pub use counter::{count_good_numbers, GoodNumberCounter};
pub use enumeration::{
    count_good_numbers_by_enumeration, frequency_by_enumeration, sum_histograms, Enumeration,
};
pub use factory::{create_from_config, GoodNumberCounterBuilder};
