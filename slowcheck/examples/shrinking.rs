//! Example demonstrating shrinking and seed replay.

use slowcheck::*;

fn main() -> Result<()> {
    println!("Slowcheck Shrinking Examples");
    println!();

    // A failing property: every sample >= 50 is a counterexample, and
    // binary halving walks it down to the boundary value 50.
    println!("Property: all integers in [0, 100] are < 50");
    let gen = Gen::int_range(0, 100)?;
    let prop = for_all_named(gen, "n", |&n| n < 50);
    let result = prop.run(&Config::default())?;
    println!("{result}");
    println!();

    // The recorded seed replays the identical run, shrink for shrink.
    println!("Replaying the failure from its recorded seed:");
    let replay_gen = Gen::int_range(0, 100)?;
    let replay_prop = for_all_named(replay_gen, "n", |&n| n < 50);
    let replay = replay_prop.run(&Config::default().with_seed(result.seed()))?;
    println!("{replay}");
    println!();
    println!(
        "Identical results: {}",
        if replay == result { "yes" } else { "no" }
    );

    // Shrink spaces can be inspected directly on the generated tree.
    println!();
    println!("Shrink candidates for one draw from [0, 100]:");
    let config = Config::default();
    let mut source = Source::from_u64(7);
    let tree = Gen::int_range(0, 100)?.generate(&config, &mut source)?;
    println!("  {}", tree.render_shrinks());

    Ok(())
}
