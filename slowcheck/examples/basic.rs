//! Basic example demonstrating slowcheck property-based testing.

use slowcheck::*;

fn main() -> Result<()> {
    println!("Slowcheck Property-Based Testing Examples");
    println!();

    // Example 1: Integer property that holds
    println!("Testing integer property: x + 0 = x");
    let int_gen = Gen::int_range(-100, 100)?;
    let addition_prop = for_all(int_gen, |&x| x + 0 == x);
    println!("{}", addition_prop.run(&Config::default())?);
    println!();

    // Example 2: Property that should fail (to demonstrate shrinking)
    println!("Testing property that should fail: all integers are positive");
    let pos_gen = Gen::int_range(-10, 10)?;
    let positive_prop = for_all_named(pos_gen, "x", |&x| x > 0);
    println!("{}", positive_prop.run(&Config::default().with_trials(20))?);
    println!();

    // Example 3: Combining generators with map
    println!("Testing mapped generator: absolute value is always non-negative");
    let abs_gen = Gen::int_range(-100, 100)?.map(|&x| x.abs());
    let abs_prop = for_all(abs_gen, |&x| x >= 0);
    println!("{}", abs_prop.run(&Config::default())?);
    println!();

    // Example 4: Weighted choice between generators
    println!("Testing frequency generator: mostly small, sometimes large");
    let mixed = Gen::from_frequency(
        Frequency::new()
            .with_alternative(9, Gen::int_range(0, 9)?)?
            .with_alternative(1, Gen::int_range(1000, 9999)?)?,
    )?;
    let mixed_prop = for_all(mixed, |&x| x < 10_000);
    println!("{}", mixed_prop.run(&Config::default())?);
    println!();

    // Example 5: Derived character generators
    println!("Sampling ascii_letter (lowercase 9x as likely as uppercase)");
    let letters = Gen::ascii_letter();
    let config = Config::default();
    let mut source = Source::from_u64(42);
    let sample: String = (0..40)
        .map(|_| letters.generate(&config, &mut source).map(|t| t.value))
        .collect::<Result<_>>()?;
    println!("  {sample}");

    Ok(())
}
