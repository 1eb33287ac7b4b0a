//! Public types for the census API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Record types
pub use census_core::{Person, PersonId, NAME_PREFIX};

// Errors
pub use census_core::{CensusError, CensusResult};

// Generator configuration
pub use census_core::{population_from_i64, GeneratorConfig, DEFAULT_POPULATION};

// Store and queries
pub use census_engine::{names_equal_ignore_case, PeopleQuery};
pub use census_storage::PersonStore;

// Dates are chrono's
pub use chrono::NaiveDate;
