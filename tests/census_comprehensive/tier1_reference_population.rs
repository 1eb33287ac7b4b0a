//! Tier 1: the one-million-record reference scenario

use crate::test_utils::{date, REFERENCE};
use census::{GeneratorConfig, Person, DEFAULT_POPULATION};

#[test]
fn reference_population_has_dense_ids() {
    let people = REFERENCE.store().people().unwrap();
    assert_eq!(people.len(), DEFAULT_POPULATION);
    for (i, p) in people.iter().enumerate() {
        assert_eq!(p.id().get(), i as u64 + 1);
    }
}

#[test]
fn born_after_returns_only_later_births() {
    let cutoff = date(2000, 1, 1);
    let result: Vec<&Person> = REFERENCE.born_after(cutoff).unwrap().collect();

    assert!(!result.is_empty());
    assert!(result.iter().all(|p| p.birth_date() > cutoff));

    let total = REFERENCE.len().unwrap();
    let not_after = REFERENCE
        .store()
        .people()
        .unwrap()
        .iter()
        .filter(|p| p.birth_date() <= cutoff)
        .count();
    assert_eq!(result.len() + not_after, total);
}

#[test]
fn by_name_returns_people_with_given_name() {
    let result: Vec<&Person> = REFERENCE.by_name("Person500").unwrap().collect();
    assert_eq!(result.len(), 1);
    assert!(result.iter().all(|p| p.name() == "Person500"));
}

#[test]
fn by_name_returns_empty_for_unknown_name() {
    assert_eq!(REFERENCE.by_name("NonExistingName").unwrap().count(), 0);
}

#[test]
fn by_id_returns_correct_person() {
    let p = REFERENCE.by_id(250_000).unwrap().expect("present");
    assert_eq!(p.id().get(), 250_000);
    assert_eq!(p.name(), "Person250000");
}

#[test]
fn by_id_returns_absent_for_out_of_range_id() {
    assert!(REFERENCE.by_id(2_000_000).unwrap().is_none());
    assert!(REFERENCE.by_id(0).unwrap().is_none());
    assert!(REFERENCE.by_id(1_000_001).unwrap().is_none());
    assert!(REFERENCE.by_id(1_000_000).unwrap().is_some());
}

#[test]
fn birth_dates_stay_within_default_bounds() {
    let config = GeneratorConfig::default();
    let (lo, hi) = REFERENCE.birth_date_span().unwrap().unwrap();
    assert!(lo >= config.earliest().unwrap());
    assert!(hi <= config.latest().unwrap());
}
