//! People query service
//!
//! Stateless facade over a shared `PersonStore`.
//!
//! # Design
//!
//! PeopleQuery holds only an `Arc<PersonStore>`. Clone is cheap (just an Arc
//! clone) and every clone sees the same data. The store is populated before
//! it is wrapped in the Arc, which orders initialization before every query.
//!
//! Sequence results are lazy iterators over the store, in store order. They
//! are `Clone`, so a result can be replayed without re-running the query.
//!
//! # Example
//!
//! ```ignore
//! let store = PersonStore::generate(1_000_000, &GeneratorConfig::default(), &mut rng)?;
//! let query = PeopleQuery::new(Arc::new(store));
//!
//! let millennials = query.born_after(NaiveDate::from_ymd_opt(1981, 1, 1).unwrap())?.count();
//! let p = query.by_id(250_000)?;
//! ```

use census_core::{CensusResult, Person, PersonId};
use census_storage::PersonStore;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::matcher::names_equal_ignore_case;

/// Read-only queries over a person store
///
/// # Thread Safety
///
/// PeopleQuery is Clone and Send + Sync. Any number of threads may query
/// concurrently; nothing is mutated.
#[derive(Clone, Debug)]
pub struct PeopleQuery {
    store: Arc<PersonStore>,
}

impl PeopleQuery {
    /// Create a query facade
    ///
    /// # Arguments
    ///
    /// * `store` - Shared, already populated store
    pub fn new(store: Arc<PersonStore>) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<PersonStore> {
        &self.store
    }

    /// Number of records in the store
    pub fn len(&self) -> CensusResult<usize> {
        Ok(self.store.people()?.len())
    }

    /// True when the store holds no records
    pub fn is_empty(&self) -> CensusResult<bool> {
        Ok(self.len()? == 0)
    }

    // =========================================================================
    // Date filters
    // =========================================================================

    /// People born strictly after `cutoff`
    ///
    /// Full scan. Any date is valid input; no match yields an empty iterator.
    ///
    /// # Errors
    ///
    /// `NotInitialized` if the store was never populated.
    pub fn born_after(
        &self,
        cutoff: NaiveDate,
    ) -> CensusResult<impl Iterator<Item = &Person> + Clone + '_> {
        let people = self.store.people()?;
        tracing::debug!(
            target: "census::query",
            op = "born_after",
            %cutoff,
            scanned = people.len(),
            "Scanning store"
        );
        Ok(people.iter().filter(move |p| p.birth_date() > cutoff))
    }

    /// Number of people born strictly after `cutoff`
    pub fn count_born_after(&self, cutoff: NaiveDate) -> CensusResult<usize> {
        Ok(self.born_after(cutoff)?.count())
    }

    /// People with `after < birth_date <= until`
    ///
    /// An inverted or empty window yields an empty iterator.
    pub fn born_between(
        &self,
        after: NaiveDate,
        until: NaiveDate,
    ) -> CensusResult<impl Iterator<Item = &Person> + Clone + '_> {
        let people = self.store.people()?;
        tracing::debug!(
            target: "census::query",
            op = "born_between",
            %after,
            %until,
            scanned = people.len(),
            "Scanning store"
        );
        Ok(people.iter().filter(move |p| {
            let d = p.birth_date();
            d > after && d <= until
        }))
    }

    /// Earliest and latest birth date, `None` for an empty store
    pub fn birth_date_span(&self) -> CensusResult<Option<(NaiveDate, NaiveDate)>> {
        let people = self.store.people()?;
        tracing::debug!(
            target: "census::query",
            op = "birth_date_span",
            scanned = people.len(),
            "Scanning store"
        );
        Ok(people.iter().map(Person::birth_date).fold(None, |span, d| match span {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        }))
    }

    // =========================================================================
    // Name filter
    // =========================================================================

    /// People whose name equals `name`, ignoring case
    ///
    /// Full scan. Names are not unique, so several records may match; none
    /// matching is not an error.
    ///
    /// # Errors
    ///
    /// `NotInitialized` if the store was never populated.
    pub fn by_name<'a>(
        &'a self,
        name: &'a str,
    ) -> CensusResult<impl Iterator<Item = &'a Person> + Clone + 'a> {
        let people = self.store.people()?;
        tracing::debug!(
            target: "census::query",
            op = "by_name",
            name,
            scanned = people.len(),
            "Scanning store"
        );
        Ok(people
            .iter()
            .filter(move |p| names_equal_ignore_case(p.name(), name)))
    }

    // =========================================================================
    // Point lookup
    // =========================================================================

    /// First person (in store order) with `id`
    ///
    /// Resolved through the store's id index, which returns the same record
    /// a front-to-back scan would.
    ///
    /// # Returns
    ///
    /// `Ok(None)` for ids that are not present, including 0 and anything
    /// past the population size.
    ///
    /// # Errors
    ///
    /// `NotInitialized` if the store was never populated.
    pub fn by_id(&self, id: u64) -> CensusResult<Option<&Person>> {
        let found = self.store.get(PersonId::new(id))?;
        tracing::debug!(
            target: "census::query",
            op = "by_id",
            id,
            found = found.is_some(),
            "Lookup by id"
        );
        Ok(found)
    }
}
