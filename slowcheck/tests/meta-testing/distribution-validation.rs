//! Distribution validation properties
//!
//! These properties ensure that generators produce distributions matching
//! their specifications - frequency weights, case ratios, range spreads.

use slowcheck::*;

/// Property: frequency selection converges to the declared weight ratios.
pub fn test_frequency_weights() {
    let frequency = Frequency::new()
        .with_alternative(70, Gen::constant(1i64))
        .unwrap()
        .with_alternative(30, Gen::constant(2i64))
        .unwrap();
    let gen = Gen::from_frequency(frequency).unwrap();

    let sample_size = 10_000;
    let config = Config::default();
    let mut count_first = 0usize;

    for i in 0..sample_size {
        let mut source = Source::from_u64(i as u64);
        if gen.generate(&config, &mut source).unwrap().value == 1 {
            count_first += 1;
        }
    }

    // Expected 7000; six standard deviations is roughly 280.
    assert!(
        (6600..=7400).contains(&count_first),
        "frequency drifted: {count_first}/10000 picked the 70% alternative"
    );
}

/// Property: ascii_letter mixes lowercase and uppercase 9:1 and never
/// produces anything but letters.
pub fn test_ascii_letter_case_ratio() {
    let gen = Gen::ascii_letter();
    let config = Config::default();

    let sample_size = 10_000;
    let mut lowercase = 0usize;

    for i in 0..sample_size {
        let mut source = Source::from_u64(i as u64);
        let c = gen.generate(&config, &mut source).unwrap().value;
        assert!(c.is_ascii_alphabetic(), "non-letter {c:?} generated");
        if c.is_ascii_lowercase() {
            lowercase += 1;
        }
    }

    // Expected 9000 lowercase; six standard deviations is roughly 180.
    assert!(
        (8700..=9300).contains(&lowercase),
        "case ratio drifted: {lowercase}/10000 lowercase"
    );
}

/// Property: int_range sampling is roughly uniform over the interval.
pub fn test_int_range_is_roughly_uniform() {
    let gen = Gen::int_range(0, 100).unwrap();
    let config = Config::default();

    let sample_size = 10_000usize;
    let mut total = 0i64;
    let mut source = Source::from_u64(23);
    for _ in 0..sample_size {
        total += gen.generate(&config, &mut source).unwrap().value;
    }

    let mean = total as f64 / sample_size as f64;
    assert!(
        (45.0..=55.0).contains(&mean),
        "uniform mean drifted to {mean}"
    );
}
