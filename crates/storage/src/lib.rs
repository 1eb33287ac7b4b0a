//! Storage layer for census
//!
//! This crate implements the record store:
//! - PersonStore: owns the ordered person sequence and its id index
//! - generator: synthetic population drawn from a caller-supplied Rng
//!
//! The store is populated in one step and read-only afterwards.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod generator;
pub mod store;

pub use generator::generate_people;
pub use store::PersonStore;
