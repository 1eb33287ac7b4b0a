//! Tier 3: query properties over random populations

use census::{Census, NaiveDate, Person};
use proptest::prelude::*;

fn ids<'a>(it: impl Iterator<Item = &'a Person>) -> Vec<u64> {
    it.map(|p| p.id().get()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn by_id_present_exactly_in_range(
        count in 0usize..400,
        seed in any::<u64>(),
        probe in 0u64..600,
    ) {
        let query = Census::seeded(count, seed).unwrap();
        let found = query.by_id(probe).unwrap();
        prop_assert_eq!(found.is_some(), (1..=count as u64).contains(&probe));
    }

    #[test]
    fn queries_are_idempotent(
        count in 0usize..400,
        seed in any::<u64>(),
        days in 0i64..30_000,
    ) {
        let query = Census::seeded(count, seed).unwrap();
        let cutoff = NaiveDate::from_ymd_opt(1940, 1, 1).unwrap() + chrono::Duration::days(days);

        prop_assert_eq!(
            ids(query.born_after(cutoff).unwrap()),
            ids(query.born_after(cutoff).unwrap())
        );
        prop_assert_eq!(
            ids(query.by_name("person7").unwrap()),
            ids(query.by_name("person7").unwrap())
        );
    }

    #[test]
    fn born_between_is_born_after_minus_born_after(
        seed in any::<u64>(),
        a in 0i64..20_000,
        width in 0i64..10_000,
    ) {
        let query = Census::seeded(300, seed).unwrap();
        let base = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
        let after = base + chrono::Duration::days(a);
        let until = after + chrono::Duration::days(width);

        let window = query.born_between(after, until).unwrap().count();
        let expected =
            query.count_born_after(after).unwrap() - query.count_born_after(until).unwrap();
        prop_assert_eq!(window, expected);
    }
}
