//! Person store
//!
//! Owns the authoritative, ordered person sequence.
//!
//! # Design
//!
//! - Vec<Person>: store order is insertion order, scans are sequential
//! - FxHashMap<PersonId, usize>: id -> position of the first record with that id
//! - Option<Dataset>: `None` until the first initialization, so queries on
//!   a never-populated store are distinguishable from queries on an empty one
//!
//! # Lifecycle
//!
//! `initialize` and `load` take `&mut self`. A new dataset is built aside and
//! swapped in only once complete, so a failed initialization leaves the
//! previous contents untouched and no partial state is ever observable.
//! Share the store for reading by moving it into an `Arc` after populating it.
//!
//! # Example
//!
//! ```ignore
//! let mut store = PersonStore::new();
//! store.initialize(1_000, &GeneratorConfig::default(), &mut rng)?;
//! let people = store.people()?;
//! ```

use census_core::{CensusError, CensusResult, GeneratorConfig, Person, PersonId};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::Instant;

use crate::generator::generate_people;

/// A populated person sequence plus its id index
#[derive(Debug)]
struct Dataset {
    people: Vec<Person>,
    by_id: FxHashMap<PersonId, usize>,
}

impl Dataset {
    fn new(people: Vec<Person>) -> Self {
        let mut by_id = FxHashMap::with_capacity_and_hasher(people.len(), Default::default());
        for (pos, person) in people.iter().enumerate() {
            // First occurrence wins when ids repeat
            by_id.entry(person.id()).or_insert(pos);
        }
        Self { people, by_id }
    }
}

/// In-memory person store
///
/// # Thread Safety
///
/// PersonStore is Send + Sync. Reads take `&self`; mutation needs `&mut self`,
/// so once the store sits behind an `Arc` it is read-only for every holder.
#[derive(Default)]
pub struct PersonStore {
    dataset: Option<Dataset>,
}

impl PersonStore {
    /// Create an uninitialized store
    pub fn new() -> Self {
        Self { dataset: None }
    }

    /// Create a store and populate it with `count` synthetic people
    pub fn generate<R: Rng>(
        count: usize,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> CensusResult<Self> {
        let mut store = Self::new();
        store.initialize(count, config, rng)?;
        Ok(store)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Replace the contents with `count` synthetic people
    ///
    /// Ids run 1..=count, names are `Person{id}`, birth dates are drawn from
    /// `config` using `rng`. A count of zero yields an initialized, empty store.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `config` fails validation; the store is unchanged.
    pub fn initialize<R: Rng>(
        &mut self,
        count: usize,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> CensusResult<()> {
        let started = Instant::now();
        let people = generate_people(count, config, rng)?;
        self.install(people);
        tracing::info!(
            target: "census::storage",
            count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Store initialized"
        );
        Ok(())
    }

    /// `initialize` with the default generator bounds
    pub fn initialize_default<R: Rng>(&mut self, count: usize, rng: &mut R) -> CensusResult<()> {
        self.initialize(count, &GeneratorConfig::default(), rng)
    }

    /// Replace the contents with a caller-supplied sequence
    ///
    /// Store order is the order of `people`. Names and ids are taken as
    /// given: neither is required to be unique.
    pub fn load(&mut self, people: Vec<Person>) {
        let count = people.len();
        self.install(people);
        tracing::info!(target: "census::storage", count, "Store loaded");
    }

    fn install(&mut self, people: Vec<Person>) {
        self.dataset = Some(Dataset::new(people));
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// True once `initialize` or `load` has succeeded
    pub fn is_initialized(&self) -> bool {
        self.dataset.is_some()
    }

    /// Number of records (0 when uninitialized)
    pub fn len(&self) -> usize {
        self.dataset.as_ref().map(|d| d.people.len()).unwrap_or(0)
    }

    /// True when there are no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The full sequence in store order
    ///
    /// # Errors
    ///
    /// `NotInitialized` if the store was never populated.
    pub fn people(&self) -> CensusResult<&[Person]> {
        self.dataset
            .as_ref()
            .map(|d| d.people.as_slice())
            .ok_or(CensusError::NotInitialized)
    }

    /// Position of the first record with `id`, via the id index
    ///
    /// # Errors
    ///
    /// `NotInitialized` if the store was never populated.
    #[inline]
    pub fn position_of(&self, id: PersonId) -> CensusResult<Option<usize>> {
        let dataset = self.dataset.as_ref().ok_or(CensusError::NotInitialized)?;
        Ok(dataset.by_id.get(&id).copied())
    }

    /// First record with `id`
    ///
    /// `Ok(None)` when no record has that id.
    pub fn get(&self, id: PersonId) -> CensusResult<Option<&Person>> {
        let people = self.people()?;
        Ok(self.position_of(id)?.and_then(|pos| people.get(pos)))
    }
}

impl std::fmt::Debug for PersonStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonStore")
            .field("initialized", &self.is_initialized())
            .field("len", &self.len())
            .finish()
    }
}
