//! Census: an in-memory person store with linear-scan queries.
//!
//! This crate re-exports the public surface of the workspace crates and adds
//! one convenience constructor for the common "generate, then query" flow.
//!
//! ```ignore
//! use census::{Census, NaiveDate};
//!
//! let census = Census::seeded(1_000_000, 42)?;
//! let recent = census.born_after(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())?.count();
//! let p = census.by_id(250_000)?;
//! ```

pub mod types;

pub use types::*;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Generator config, store and query facade in one step.
pub struct Census;

impl Census {
    /// Generate `count` people with default bounds from a seeded Rng.
    pub fn seeded(count: usize, seed: u64) -> CensusResult<PeopleQuery> {
        Self::with_config(count, &GeneratorConfig::default(), seed)
    }

    /// Generate `count` people within `config` from a seeded Rng.
    pub fn with_config(
        count: usize,
        config: &GeneratorConfig,
        seed: u64,
    ) -> CensusResult<PeopleQuery> {
        let mut rng = StdRng::seed_from_u64(seed);
        let store = PersonStore::generate(count, config, &mut rng)?;
        Ok(PeopleQuery::new(Arc::new(store)))
    }
}
