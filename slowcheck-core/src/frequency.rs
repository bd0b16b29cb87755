//! Weighted choice between alternative generators.

use crate::data::{Seed, Source};
use crate::error::{Result, SlowcheckError};
use crate::gen::Gen;
use crate::tree::Tree;
use std::rc::Rc;

/// An ordered list of weighted generator alternatives.
///
/// Selection probability of alternative *i* is `weight_i / Σweights`.
/// Weights are strictly positive and at least one alternative must be
/// registered before the frequency can be turned into a generator.
pub struct Frequency<T> {
    alternatives: Vec<(u64, Rc<Gen<T>>)>,
}

impl<T> Default for Frequency<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frequency<T> {
    /// Create an empty frequency builder.
    pub fn new() -> Self {
        Frequency {
            alternatives: Vec::new(),
        }
    }

    /// Append an alternative with the given weight.
    ///
    /// Fails with [`SlowcheckError::InvalidWeight`] when the weight is
    /// not positive.
    pub fn with_alternative(self, weight: u64, gen: Gen<T>) -> Result<Self> {
        if weight == 0 {
            return Err(SlowcheckError::InvalidWeight { weight });
        }
        Ok(self.with_alternative_unchecked(weight, gen))
    }

    pub(crate) fn with_alternative_unchecked(mut self, weight: u64, gen: Gen<T>) -> Self {
        self.alternatives.push((weight, Rc::new(gen)));
        self
    }

    /// Number of registered alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Whether no alternative has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Sum of all registered weights.
    pub fn total_weight(&self) -> u64 {
        self.alternatives.iter().map(|(weight, _)| *weight).sum()
    }
}

impl<T> Gen<T>
where
    T: Clone + 'static,
{
    /// Turn a frequency into a generator.
    ///
    /// At generation time a value in `[1, Σweights]` selects the
    /// alternative whose cumulative weight interval contains it;
    /// alternatives are tried in registration order, so ties break
    /// deterministically. The chosen alternative generates from a forked
    /// sub-source. Shrink candidates are the chosen alternative's own
    /// candidates, followed by one fallback value per earlier-registered
    /// alternative: a structurally simpler alternative that still fails
    /// is often the better counterexample.
    pub fn from_frequency(frequency: Frequency<T>) -> Result<Gen<T>> {
        if frequency.is_empty() {
            return Err(SlowcheckError::EmptyFrequency);
        }
        Ok(Self::from_frequency_unchecked(frequency))
    }

    pub(crate) fn from_frequency_unchecked(frequency: Frequency<T>) -> Gen<T> {
        let alternatives = Rc::new(frequency.alternatives);
        Gen::new(move |config, source| {
            let total: u64 = alternatives.iter().map(|(weight, _)| *weight).sum();
            let draw = source.next_bounded(total) + 1;

            let mut cumulative = 0u64;
            let mut index = alternatives.len() - 1;
            for (i, (weight, _)) in alternatives.iter().enumerate() {
                cumulative += *weight;
                if draw <= cumulative {
                    index = i;
                    break;
                }
            }

            // One sub-source per alternative, forked in registration order,
            // so the stream layout never depends on which one was selected.
            let seeds: Vec<Seed> = alternatives.iter().map(|_| source.fork().seed()).collect();

            let mut chosen_source = Source::new(seeds[index]);
            let chosen = alternatives[index].1.generate(config, &mut chosen_source)?;

            let alternatives = Rc::clone(&alternatives);
            let config = config.clone();
            let own = chosen.clone();
            Ok(Tree::new(chosen.value.clone(), move || {
                let mut out = own.children();
                for (j, seed) in seeds.iter().enumerate().take(index) {
                    let mut fallback_source = Source::new(*seed);
                    if let Ok(fallback) =
                        alternatives[j].1.generate(&config, &mut fallback_source)
                    {
                        out.push(fallback);
                    }
                }
                out
            }))
        })
    }
}
