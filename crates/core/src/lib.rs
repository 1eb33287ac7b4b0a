//! Core types for census
//!
//! This crate defines the types shared by every layer:
//! - Person / PersonId: the immutable record held by the store
//! - CensusError / CensusResult: the error taxonomy
//! - GeneratorConfig: bounds for the synthetic population
//!
//! No behavior lives here beyond construction and validation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod person;

pub use config::{population_from_i64, GeneratorConfig, DEFAULT_POPULATION};
pub use error::{CensusError, CensusResult};
pub use person::{Person, PersonId, NAME_PREFIX};
