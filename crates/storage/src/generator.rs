//! Synthetic population generator
//!
//! Ids run 1..=count, names are `Person{id}` and birth dates are drawn
//! component by component (year, month, day) from a validated
//! `GeneratorConfig`. The Rng is always supplied by the caller so tests
//! can seed it.

use census_core::{CensusError, CensusResult, GeneratorConfig, Person};
use chrono::NaiveDate;
use rand::Rng;

/// Generate `count` synthetic people
///
/// Validates `config` first; nothing is drawn from `rng` when it is rejected.
/// A `count` whose records cannot be allocated is `InvalidInput`.
pub fn generate_people<R: Rng>(
    count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> CensusResult<Vec<Person>> {
    config.validate()?;

    let mut people = Vec::new();
    people.try_reserve_exact(count).map_err(|e| {
        CensusError::invalid_input(format!("cannot allocate {count} people: {e}"))
    })?;
    for id in 1..=count as u64 {
        let birth_date = draw_date(config, rng)?;
        people.push(Person::synthetic(id, birth_date));
    }
    Ok(people)
}

fn draw_date<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> CensusResult<NaiveDate> {
    let year = rng.gen_range(config.years());
    let month = rng.gen_range(config.months());
    let day = rng.gen_range(config.days());
    // Unreachable for a validated config (day <= 28)
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CensusError::invalid_input(format!("cannot build date {year}-{month:02}-{day:02}"))
    })
}
