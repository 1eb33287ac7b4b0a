//! Tier 2: store lifecycle across the facade

use crate::test_utils::date;
use census::{CensusError, GeneratorConfig, PeopleQuery, Person, PersonStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

#[test]
fn uninitialized_store_is_a_precondition_failure() {
    let query = PeopleQuery::new(Arc::new(PersonStore::new()));

    assert!(query.born_after(date(2000, 1, 1)).is_err());
    assert!(query.by_name("Person1").is_err());
    assert_eq!(query.by_id(1).unwrap_err(), CensusError::NotInitialized);
}

#[test]
fn zero_population_answers_empty_without_error() {
    let mut rng = StdRng::seed_from_u64(1);
    let store = PersonStore::generate(0, &GeneratorConfig::default(), &mut rng).unwrap();
    let query = PeopleQuery::new(Arc::new(store));

    assert_eq!(query.born_after(date(1900, 1, 1)).unwrap().count(), 0);
    assert_eq!(query.by_name("Person1").unwrap().count(), 0);
    assert!(query.by_id(1).unwrap().is_none());
    assert_eq!(query.birth_date_span().unwrap(), None);
}

#[test]
fn reinitialize_discards_previous_records() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut store = PersonStore::generate(1_000, &GeneratorConfig::default(), &mut rng).unwrap();

    let narrow = GeneratorConfig {
        min_year: 1960,
        max_year: 1960,
        ..Default::default()
    };
    store.initialize(50, &narrow, &mut rng).unwrap();

    let query = PeopleQuery::new(Arc::new(store));
    assert_eq!(query.len().unwrap(), 50);
    assert!(query.by_id(51).unwrap().is_none());
    assert!(query.by_name("Person999").unwrap().next().is_none());
    assert_eq!(query.born_after(date(1960, 12, 31)).unwrap().count(), 0);
}

#[test]
fn reinitialize_after_sharing_requires_unique_ownership() {
    let mut rng = StdRng::seed_from_u64(2);
    let store = PersonStore::generate(10, &GeneratorConfig::default(), &mut rng).unwrap();
    let mut shared = Arc::new(store);

    let reader = PeopleQuery::new(Arc::clone(&shared));
    assert!(Arc::get_mut(&mut shared).is_none());
    drop(reader);

    Arc::get_mut(&mut shared)
        .unwrap()
        .initialize_default(3, &mut rng)
        .unwrap();
    let query = PeopleQuery::new(shared);
    assert_eq!(query.len().unwrap(), 3);
}

#[test]
fn loaded_records_keep_order_and_duplicates() {
    let mut store = PersonStore::new();
    store.load(vec![
        Person::new(1, "Kim", date(1970, 5, 5)),
        Person::new(2, "kim", date(1980, 5, 5)),
        Person::new(3, "Lee", date(1990, 5, 5)),
    ]);
    let query = PeopleQuery::new(Arc::new(store));

    let ids: Vec<u64> = query.by_name("KIM").unwrap().map(|p| p.id().get()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn same_seed_same_answers() {
    let a = census::Census::seeded(5_000, 99).unwrap();
    let b = census::Census::seeded(5_000, 99).unwrap();

    assert_eq!(a.store().people().unwrap(), b.store().people().unwrap());
    assert_eq!(
        a.count_born_after(date(1999, 3, 3)).unwrap(),
        b.count_born_after(date(1999, 3, 3)).unwrap()
    );
}
