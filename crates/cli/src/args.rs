//! Command-line arguments

use census_core::DEFAULT_POPULATION;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Query a synthetic in-memory population
#[derive(Parser, Debug)]
#[command(name = "census", version, about)]
pub struct Cli {
    /// Number of people to generate
    #[arg(long, default_value_t = DEFAULT_POPULATION as i64, allow_negative_numbers = true)]
    pub count: i64,

    /// Seed for the generator (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML file with generator bounds
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print at most this many records for sequence queries
    #[arg(long)]
    pub limit: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Query to run
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// People born strictly after DATE (YYYY-MM-DD)
    BornAfter {
        /// Cutoff date
        date: String,
    },
    /// People whose name matches NAME, ignoring case
    ByName {
        /// Name to look for
        name: String,
    },
    /// The person with identifier ID, or null
    ById {
        /// Identifier
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Population size and birth date span
    Stats,
}
