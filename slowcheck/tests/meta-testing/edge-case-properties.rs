//! Edge case properties
//!
//! Degenerate ranges, exhausted filters, and boundary configurations.

use slowcheck::*;

/// Property: a single-value range always produces that value, and the
/// value cannot shrink.
pub fn test_single_value_range() {
    let gen = Gen::int_range(5, 5).unwrap();
    let config = Config::default();
    let mut source = Source::from_u64(31);
    for _ in 0..100 {
        let tree = gen.generate(&config, &mut source).unwrap();
        assert_eq!(tree.value, 5);
        assert!(tree.children().is_empty());
    }
}

/// Property: extreme ranges generate without overflow.
pub fn test_extreme_ranges() {
    let config = Config::default();

    let full = Gen::int_range(i64::MIN, i64::MAX).unwrap();
    let mut source = Source::from_u64(1);
    for _ in 0..100 {
        let _ = full.generate(&config, &mut source).unwrap().value;
    }

    let mut source = Source::from_u64(2);
    for _ in 0..100 {
        assert!(Gen::positive().generate(&config, &mut source).unwrap().value >= 1);
        assert!(Gen::natural().generate(&config, &mut source).unwrap().value >= 0);
    }
}

/// Property: an unsatisfiable filter exhausts its configured budget and
/// errors instead of hanging.
pub fn test_filter_exhaustion_respects_budget() {
    let gen = Gen::int_range(1, 1).unwrap().filter(|&v| v != 1);

    let mut source = Source::from_u64(0);
    match gen.generate(&Config::default(), &mut source) {
        Err(SlowcheckError::FilterExhausted { retries }) => assert_eq!(retries, 100),
        other => panic!("Expected FilterExhausted, got: {other:?}"),
    }

    let tight = Config::default().with_filter_retries(7);
    let mut source = Source::from_u64(0);
    match gen.generate(&tight, &mut source) {
        Err(SlowcheckError::FilterExhausted { retries }) => assert_eq!(retries, 7),
        other => panic!("Expected FilterExhausted, got: {other:?}"),
    }
}

/// Property: zero configured trials pass vacuously.
pub fn test_zero_trials_pass() {
    let gen = Gen::int_range(0, 10).unwrap();
    let prop = for_all(gen, |_| false);
    let config = Config::default().with_trials(0);

    match prop.run(&config).unwrap() {
        PropertyResult::Passed { trials_run, .. } => assert_eq!(trials_run, 0),
        other => panic!("Expected vacuous pass, got: {other:?}"),
    }
}
