//! Generator invariant properties
//!
//! These properties ensure that generators honor their contracts:
//! determinism under a fixed seed, range bounds, and eager rejection of
//! malformed configuration.

use slowcheck::*;

/// Property: a check run twice with the same seed yields identical results.
pub fn test_check_is_deterministic_for_a_seed() {
    for raw_seed in [0u64, 1, 42, 0xdead_beef] {
        let run = || {
            let gen = Gen::int_range(-1000, 1000).unwrap();
            let prop = for_all(gen, |&x| x < 900);
            prop.run(&Config::default().with_seed(Seed::from_u64(raw_seed)))
                .unwrap()
        };
        assert_eq!(run(), run(), "seed {raw_seed} was not deterministic");
    }
}

/// Property: the raw generated value sequence replays exactly from a seed.
pub fn test_generated_sequences_replay_exactly() {
    let gen = Gen::int_range(0, 1_000_000).unwrap();
    let config = Config::default();

    let draw_sequence = |raw_seed: u64| -> Vec<i64> {
        let mut source = Source::from_u64(raw_seed);
        (0..200)
            .map(|_| gen.generate(&config, &mut source).unwrap().value)
            .collect()
    };

    assert_eq!(draw_sequence(99), draw_sequence(99));
    assert_ne!(draw_sequence(99), draw_sequence(100));
}

/// Property: `int_range(min, max)` only produces values in `[min, max]`,
/// including the degenerate `min == max` case.
pub fn test_int_range_bounds() {
    let config = Config::default();
    for (min, max) in [(-50i64, 50i64), (0, 0), (10, 11), (i64::MIN, 0), (-3, 7)] {
        let gen = Gen::int_range(min, max).unwrap();
        let mut source = Source::from_u64(17);
        for _ in 0..500 {
            let v = gen.generate(&config, &mut source).unwrap().value;
            assert!(
                (min..=max).contains(&v),
                "value {v} escaped range [{min}, {max}]"
            );
        }
    }
}

/// Property: inverted bounds fail at construction, before any trial runs.
pub fn test_invalid_range_rejected_before_trials() {
    match Gen::int_range(5, 1) {
        Err(SlowcheckError::InvalidRange { min: 5, max: 1 }) => (),
        other => panic!("Expected InvalidRange, got: {other:?}"),
    }
}

/// Property: constant and no_shrink generators carry no shrink candidates.
pub fn test_constant_and_no_shrink_carry_no_candidates() {
    let config = Config::default();

    let constant = Gen::constant(17i64);
    let mut source = Source::from_u64(1);
    let tree = constant.generate(&config, &mut source).unwrap();
    assert_eq!(tree.value, 17);
    assert!(tree.children().is_empty());

    let stripped = Gen::int_range(0, 100).unwrap().no_shrink();
    let mut source = Source::from_u64(1);
    let tree = stripped.generate(&config, &mut source).unwrap();
    assert!(tree.children().is_empty());
}
