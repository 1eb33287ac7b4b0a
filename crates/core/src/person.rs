//! Person record and identifier

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of every generated name (`Person1`, `Person2`, ...)
pub const NAME_PREFIX: &str = "Person";

/// Identifier of a person
///
/// 1-based and dense under the default generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    /// Wrap a raw identifier
    pub const fn new(id: u64) -> Self {
        PersonId(id)
    }

    /// Raw identifier value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for PersonId {
    fn from(id: u64) -> Self {
        PersonId(id)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person record
///
/// Immutable once built: fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    name: String,
    birth_date: NaiveDate,
}

impl Person {
    /// Create a record with an arbitrary name
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth_date,
        }
    }

    /// Create a record named after its id (`Person{id}`)
    pub fn synthetic(id: impl Into<PersonId>, birth_date: NaiveDate) -> Self {
        let id = id.into();
        Self {
            id,
            name: format!("{NAME_PREFIX}{id}"),
            birth_date,
        }
    }

    /// Identifier
    pub fn id(&self) -> PersonId {
        self.id
    }

    /// Name as stored (original casing)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Date of birth
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}
