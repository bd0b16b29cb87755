//! Seeds, random sources, and run configuration.

use std::fmt;

/// Splittable random seed for deterministic value generation.
///
/// Seeds can be split to create independent random streams,
/// ensuring deterministic and reproducible test runs. A seed is
/// capturable bit-for-bit via [`Seed::into_parts`] and restorable via
/// [`Seed::from_parts`], which is what makes failure replay possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed(pub u64, pub u64);

impl Seed {
    /// Create a new seed from a single value.
    pub fn from_u64(value: u64) -> Self {
        let state = splitmix64_mix(value);
        let gamma = mix_gamma(state);
        Seed(state, gamma)
    }

    /// Restore a seed captured with [`Seed::into_parts`].
    pub fn from_parts(state: u64, gamma: u64) -> Self {
        Seed(state, gamma)
    }

    /// Capture the raw seed state for later replay.
    pub fn into_parts(self) -> (u64, u64) {
        (self.0, self.1)
    }

    /// Split a seed into two independent seeds.
    /// Uses SplitMix64 splitting strategy for independence.
    pub fn split(self) -> (Self, Self) {
        let Seed(state, gamma) = self;
        let new_state = state.wrapping_add(gamma);
        let output = splitmix64_mix(new_state);
        let new_gamma = mix_gamma(output);

        (Seed(new_state, gamma), Seed(output, new_gamma))
    }

    /// Generate the next random value and advance the seed.
    /// Uses SplitMix64 for high-quality output.
    pub fn next_u64(self) -> (u64, Self) {
        let Seed(state, gamma) = self;
        let new_state = state.wrapping_add(gamma);
        let output = splitmix64_mix(new_state);
        (output, Seed(new_state, gamma))
    }

    /// Generate a random seed from process entropy.
    pub fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        Seed(rng.gen(), rng.gen())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({}, {})", self.0, self.1)
    }
}

/// A mutable stream of pseudo-random values over a [`Seed`].
///
/// A source is owned by exactly one trial lineage at a time; identical
/// seed plus identical sequence of calls yields identical values.
#[derive(Debug, Clone)]
pub struct Source {
    seed: Seed,
}

impl Source {
    /// Create a source starting from the given seed.
    pub fn new(seed: Seed) -> Self {
        Source { seed }
    }

    /// Create a source from a single seed value.
    pub fn from_u64(value: u64) -> Self {
        Source::new(Seed::from_u64(value))
    }

    /// Capture the current stream state.
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Draw the next raw value, advancing the stream.
    pub fn next_u64(&mut self) -> u64 {
        let (value, next) = self.seed.next_u64();
        self.seed = next;
        value
    }

    /// Draw a bounded value in `[0, bound)`, advancing the stream.
    pub fn next_bounded(&mut self, bound: u64) -> u64 {
        let value = self.next_u64();
        (value as u128 * bound as u128 >> 64) as u64
    }

    /// Draw a boolean, advancing the stream.
    pub fn next_bool(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }

    /// Draw a value uniformly distributed over `[min, max]` inclusive.
    pub fn next_int(&mut self, min: i64, max: i64) -> crate::error::Result<i64> {
        if min > max {
            return Err(crate::error::SlowcheckError::InvalidRange { min, max });
        }
        let span = (max as i128) - (min as i128) + 1;
        if span > u64::MAX as i128 {
            // The full i64 domain: every raw draw is already uniform.
            return Ok(self.next_u64() as i64);
        }
        let offset = self.next_bounded(span as u64);
        Ok(((min as i128) + (offset as i128)) as i64)
    }

    /// Split off an independent sub-stream, advancing this one.
    ///
    /// Sub-values sampled from the fork do not entangle with later draws
    /// from this source, so reordering which sub-generator runs first
    /// cannot change the set of values produced.
    pub fn fork(&mut self) -> Source {
        let (own, forked) = self.seed.split();
        self.seed = own;
        Source::new(forked)
    }
}

/// Configuration for a property check.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of passing trials required before declaring success.
    pub trials: usize,

    /// Maximum number of accepted shrink steps.
    pub shrink_limit: usize,

    /// Maximum resample attempts for `filter` before the trial is discarded.
    pub filter_retry_budget: usize,

    /// Consecutive discarded trials tolerated before giving up.
    pub discard_limit: usize,

    /// Seed to replay; a fresh one is drawn when absent.
    pub seed: Option<Seed>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            trials: 100,
            shrink_limit: 1000,
            filter_retry_budget: 100,
            discard_limit: 100,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new config with the given number of trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Create a new config with the given shrink limit.
    pub fn with_shrinks(mut self, shrinks: usize) -> Self {
        self.shrink_limit = shrinks;
        self
    }

    /// Create a new config with the given filter retry budget.
    pub fn with_filter_retries(mut self, retries: usize) -> Self {
        self.filter_retry_budget = retries;
        self
    }

    /// Create a new config with the given consecutive-discard ceiling.
    pub fn with_discard_limit(mut self, limit: usize) -> Self {
        self.discard_limit = limit;
        self
    }

    /// Create a new config that replays the given seed.
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// SplitMix64 mixing function for high-quality output.
fn splitmix64_mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Generate a good gamma value for SplitMix64 splitting.
fn mix_gamma(mut z: u64) -> u64 {
    z = splitmix64_mix(z);
    // Gamma must be odd for maximal period
    (z | 1).wrapping_mul(0x9e3779b97f4a7c15)
}
