//! Query engine for census
//!
//! Read-only queries over a populated `PersonStore`:
//! - born_after / born_between: date range filters
//! - by_name: case-insensitive name match
//! - by_id: point lookup
//!
//! `PeopleQuery` is a stateless facade over a shared store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod matcher;
pub mod query;

pub use matcher::names_equal_ignore_case;
pub use query::PeopleQuery;
