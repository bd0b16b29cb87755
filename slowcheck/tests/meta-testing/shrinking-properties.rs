//! Shrinking correctness properties
//!
//! These properties ensure that shrinking terminates and converges to
//! minimal counterexamples that still falsify the predicate.

use slowcheck::*;

/// Property: shrinking a composed generator terminates and the reported
/// minimal value still fails the predicate that triggered the search.
pub fn test_shrink_terminates_and_still_fails() {
    let gen = Gen::int_range(0, 100)
        .unwrap()
        .bind(|&n| Gen::int_range(0, n).unwrap());
    let prop = for_all(gen, |&v| v < 10);
    let config = Config::default().with_seed(Seed::from_u64(3));

    match prop.run(&config).unwrap() {
        result @ PropertyResult::Failed { .. } => {
            let minimal: i64 = result.minimal_counterexample().unwrap().parse().unwrap();
            assert!(minimal >= 10, "minimal value {minimal} no longer fails");
        }
        other => panic!("Expected failure, got: {other:?}"),
    }
}

/// Property: with binary halving toward zero, "all integers in [0, 100]
/// are < 50" must shrink any failing sample to exactly the boundary 50.
pub fn test_binary_shrink_finds_boundary() {
    for raw_seed in [7u64, 8, 9, 10] {
        let gen = Gen::int_range(0, 100).unwrap();
        let prop = for_all(gen, |&v| v < 50);
        let config = Config::default().with_seed(Seed::from_u64(raw_seed));

        match prop.run(&config).unwrap() {
            result @ PropertyResult::Failed { .. } => {
                assert_eq!(result.minimal_counterexample(), Some("50"));
                let original: i64 =
                    result.original_counterexample().unwrap().parse().unwrap();
                assert!(original >= 50);
            }
            PropertyResult::Passed { .. } => {
                // A hundred trials over [0, 100] without one value >= 50
                // does not happen.
                panic!("seed {raw_seed} never produced a failing sample");
            }
            other => panic!("Expected failure, got: {other:?}"),
        }
    }
}

/// Property: vectors shrink by dropping elements down to the shortest
/// still-failing shape, then simplifying the survivors.
pub fn test_vector_shrinks_to_minimal_length() {
    let gen = Gen::vec_of(Gen::int_range(0, 100).unwrap());
    let prop = for_all(gen, |v: &Vec<i64>| v.len() < 3);
    let config = Config::default().with_seed(Seed::from_u64(12));

    match prop.run(&config).unwrap() {
        result @ PropertyResult::Failed { .. } => {
            assert_eq!(result.minimal_counterexample(), Some("[0, 0, 0]"));
        }
        other => panic!("Expected failure, got: {other:?}"),
    }
}
