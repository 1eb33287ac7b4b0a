//! Shared fixtures for the comprehensive suite

use census::{Census, NaiveDate, PeopleQuery, DEFAULT_POPULATION};
use once_cell::sync::Lazy;

/// Seed used for the shared reference population
pub const REFERENCE_SEED: u64 = 20_240_101;

/// One million people, generated once and shared by every test that needs it
pub static REFERENCE: Lazy<PeopleQuery> = Lazy::new(|| {
    Census::seeded(DEFAULT_POPULATION, REFERENCE_SEED).expect("reference population")
});

/// Build a date or panic
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
