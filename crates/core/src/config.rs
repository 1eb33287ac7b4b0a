//! Generator configuration
//!
//! Bounds for the synthetic population. Each date component is drawn
//! independently, so the day bound is capped at 28: every month has at
//! least that many days and a validated config can never produce an
//! invalid calendar date.

use crate::error::{CensusError, CensusResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Reference population size
pub const DEFAULT_POPULATION: usize = 1_000_000;

/// Largest day bound that is valid in every month
const MAX_SAFE_DAY: u32 = 28;

/// Inclusive bounds used to draw birth dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Earliest birth year
    pub min_year: i32,
    /// Latest birth year
    pub max_year: i32,
    /// Earliest month (1-12)
    pub min_month: u32,
    /// Latest month (1-12)
    pub max_month: u32,
    /// Earliest day of month (1-28)
    pub min_day: u32,
    /// Latest day of month (1-28)
    pub max_day: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_year: 1950,
            max_year: 2021,
            min_month: 1,
            max_month: 12,
            min_day: 1,
            max_day: 27,
        }
    }
}

impl GeneratorConfig {
    /// Parse a TOML document and validate it
    ///
    /// Keys that are omitted keep their default value.
    pub fn from_toml_str(source: &str) -> CensusResult<Self> {
        let config: GeneratorConfig = toml::from_str(source)
            .map_err(|e| CensusError::invalid_input(format!("malformed generator config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every bound is ordered and yields valid dates
    pub fn validate(&self) -> CensusResult<()> {
        let result = self.check();
        if let Err(ref e) = result {
            tracing::warn!(target: "census::config", error = %e, "Rejected generator config");
        }
        result
    }

    fn check(&self) -> CensusResult<()> {
        if self.min_year > self.max_year {
            return Err(CensusError::invalid_input(format!(
                "min_year {} is after max_year {}",
                self.min_year, self.max_year
            )));
        }
        let (first, last) = (NaiveDate::MIN.year(), NaiveDate::MAX.year());
        if self.min_year < first || self.max_year > last {
            return Err(CensusError::invalid_input(format!(
                "years must lie within {first}..={last}"
            )));
        }

        if self.min_month > self.max_month {
            return Err(CensusError::invalid_input(format!(
                "min_month {} is after max_month {}",
                self.min_month, self.max_month
            )));
        }
        if self.min_month < 1 || self.max_month > 12 {
            return Err(CensusError::invalid_input("months must lie within 1..=12"));
        }

        if self.min_day > self.max_day {
            return Err(CensusError::invalid_input(format!(
                "min_day {} is after max_day {}",
                self.min_day, self.max_day
            )));
        }
        if self.min_day < 1 || self.max_day > MAX_SAFE_DAY {
            return Err(CensusError::invalid_input(format!(
                "days must lie within 1..={MAX_SAFE_DAY}"
            )));
        }

        Ok(())
    }

    /// Inclusive year bounds
    pub fn years(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }

    /// Inclusive month bounds
    pub fn months(&self) -> RangeInclusive<u32> {
        self.min_month..=self.max_month
    }

    /// Inclusive day bounds
    pub fn days(&self) -> RangeInclusive<u32> {
        self.min_day..=self.max_day
    }

    /// Earliest date this config can produce
    pub fn earliest(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.min_year, self.min_month, self.min_day)
    }

    /// Latest date this config can produce
    pub fn latest(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.max_year, self.max_month, self.max_day)
    }
}

/// Convert a signed population size coming from outside the process
///
/// Negative sizes are rejected as invalid input; zero is valid. Sizes that
/// pass here may still be too large to allocate, which the generator reports.
pub fn population_from_i64(count: i64) -> CensusResult<usize> {
    if count < 0 {
        return Err(CensusError::invalid_input(format!(
            "population size must not be negative, got {count}"
        )));
    }
    usize::try_from(count).map_err(|_| {
        CensusError::invalid_input(format!(
            "population size {count} exceeds the address space of this target"
        ))
    })
}
