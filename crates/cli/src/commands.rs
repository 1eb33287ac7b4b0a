//! Command execution
//!
//! Builds the store from the CLI arguments, runs the selected query and
//! writes JSON lines to the given writer.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use census_core::{population_from_i64, CensusError, GeneratorConfig, Person};
use census_engine::PeopleQuery;
use census_storage::PersonStore;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::args::{Cli, Command};

/// Output of the `stats` command
#[derive(Debug, Serialize)]
struct Stats {
    count: usize,
    min_birth_date: Option<NaiveDate>,
    max_birth_date: Option<NaiveDate>,
}

/// Run one CLI invocation, writing results to `out`
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let count = population_from_i64(cli.count)?;
    let config = load_config(cli.config.as_deref())?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let store = PersonStore::generate(count, &config, &mut rng)
        .context("failed to generate population")?;
    let query = PeopleQuery::new(Arc::new(store));

    match &cli.command {
        Command::BornAfter { date } => {
            let cutoff = parse_date(date)?;
            write_people(&mut *out, query.born_after(cutoff)?, cli.limit)?;
        }
        Command::ByName { name } => {
            write_people(&mut *out, query.by_name(name)?, cli.limit)?;
        }
        Command::ById { id } => {
            // Negative ids can never match
            let person = match u64::try_from(*id) {
                Ok(id) => query.by_id(id)?,
                Err(_) => None,
            };
            serde_json::to_writer(&mut *out, &person)?;
            writeln!(out)?;
        }
        Command::Stats => {
            let span = query.birth_date_span()?;
            let stats = Stats {
                count: query.len()?,
                min_birth_date: span.map(|(lo, _)| lo),
                max_birth_date: span.map(|(_, hi)| hi),
            };
            serde_json::to_writer(&mut *out, &stats)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Generator bounds from `path`, or the defaults
fn load_config(path: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = GeneratorConfig::from_toml_str(&source)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

fn parse_date(raw: &str) -> Result<NaiveDate, CensusError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| CensusError::invalid_input(format!("bad date {raw:?}: {e}")))
}

fn write_people<'a>(
    out: &mut impl Write,
    people: impl Iterator<Item = &'a Person>,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let mut matched = 0usize;
    let mut printed = 0usize;
    for person in people {
        matched += 1;
        if limit.map_or(true, |limit| printed < limit) {
            serde_json::to_writer(&mut *out, person)?;
            writeln!(out)?;
            printed += 1;
        }
    }
    tracing::info!(target: "census::cli", matched, printed, "Query finished");
    Ok(())
}
