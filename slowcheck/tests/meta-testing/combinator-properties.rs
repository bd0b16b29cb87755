//! Combinator law properties
//!
//! These properties exercise map, bind, and filter composition over the
//! generator algebra.

use slowcheck::*;

/// Property: mapping the identity over a bounded character range never
/// escapes the range.
pub fn test_map_preserves_range() {
    let gen = Gen::char_range(' ', '~').unwrap().map(|&c| c);
    let prop = for_all(gen, |&c| (' '..='~').contains(&c));
    let config = Config::default().with_trials(1000);

    match prop.run(&config).unwrap() {
        PropertyResult::Passed { .. } => (),
        other => panic!("mapped char range escaped its bounds: {other}"),
    }
}

/// Property: map applies its transform to every generated value.
pub fn test_map_transforms_values() {
    let gen = Gen::int_range(0, 1000).unwrap().map(|&v| v * 2);
    let prop = for_all(gen, |&v| v % 2 == 0);

    match prop.run(&Config::default()).unwrap() {
        PropertyResult::Passed { .. } => (),
        other => panic!("doubled values were not all even: {other}"),
    }
}

/// Property: bind sees the driving draw when producing the dependent one.
pub fn test_bind_respects_dependency() {
    let gen = Gen::int_range(1, 5).unwrap().bind(|&n| {
        Gen::int_range(0, n)
            .unwrap()
            .map(move |&v| (n, v))
    });
    let prop = for_all(gen, |&(n, v)| v <= n && (1..=5).contains(&n));

    match prop.run(&Config::default()).unwrap() {
        PropertyResult::Passed { .. } => (),
        other => panic!("dependent draw escaped its bound: {other}"),
    }
}

/// Property: filter only ever produces matching values.
pub fn test_filter_only_produces_matching() {
    let gen = Gen::int_range(0, 100).unwrap().filter(|&v| v % 2 == 0);
    let prop = for_all(gen, |&v| v % 2 == 0);

    match prop.run(&Config::default()).unwrap() {
        PropertyResult::Passed { .. } => (),
        other => panic!("filter leaked an odd value: {other}"),
    }
}

/// Property: shrink candidates of a filtered generator satisfy the filter
/// too - the minimal counterexample of "even values are < 50" is still
/// even and still fails.
pub fn test_filter_shrinks_respect_predicate() {
    let gen = Gen::int_range(0, 100).unwrap().filter(|&v| v % 2 == 0);
    let prop = for_all(gen, |&v| v < 50);
    let config = Config::default().with_seed(Seed::from_u64(5));

    match prop.run(&config).unwrap() {
        result @ PropertyResult::Failed { .. } => {
            let original: i64 = result.original_counterexample().unwrap().parse().unwrap();
            let minimal: i64 = result.minimal_counterexample().unwrap().parse().unwrap();
            assert_eq!(minimal % 2, 0, "shrinking escaped the filter");
            assert!(minimal >= 50, "minimal value {minimal} no longer fails");
            assert!(minimal <= original);
        }
        other => panic!("Expected failure, got: {other:?}"),
    }
}
