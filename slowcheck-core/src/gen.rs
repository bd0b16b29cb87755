//! Generator combinators.

use crate::data::{Config, Seed, Source};
use crate::error::{Result, SlowcheckError};
use crate::tree::Tree;
use std::rc::Rc;

/// A generator for test data of type `T`.
///
/// Generators are explicit, first-class values composed with combinator
/// functions. A generator is an immutable description of how to produce a
/// value (plus its shrink candidates) from a random source; it is built
/// once at property-definition time and reused across trials.
pub struct Gen<T> {
    run: Box<dyn Fn(&Config, &mut Source) -> Result<Tree<T>>>,
}

impl<T> std::fmt::Debug for Gen<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gen").finish_non_exhaustive()
    }
}

impl<T> Gen<T> {
    /// Create a new generator from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Config, &mut Source) -> Result<Tree<T>> + 'static,
    {
        Gen { run: Box::new(f) }
    }

    /// Produce a value and its shrink candidates from the given source.
    pub fn generate(&self, config: &Config, source: &mut Source) -> Result<Tree<T>> {
        (self.run)(config, source)
    }

    /// A generator that always produces the same value, with no shrinks.
    pub fn constant(value: T) -> Self
    where
        T: Clone + 'static,
    {
        Gen::new(move |_config, _source| Ok(Tree::singleton(value.clone())))
    }
}

impl<T> Gen<T>
where
    T: Clone + 'static,
{
    /// Map a function over the generated values.
    ///
    /// Shrink candidates are inherited from the source generator, with `f`
    /// reapplied lazily to each. `f` must be a total, deterministic
    /// function of its input; a panic inside it surfaces as a discarded
    /// trial at the property runner.
    pub fn map<U, F>(self, f: F) -> Gen<U>
    where
        U: Clone + 'static,
        F: Fn(&T) -> U + 'static,
    {
        let f: Rc<dyn Fn(&T) -> U> = Rc::new(f);
        Gen::new(move |config, source| {
            let tree = self.generate(config, source)?;
            Ok(tree.map_rc(Rc::clone(&f)))
        })
    }

    /// Dependent generation: draw a `T`, then draw a `U` from the
    /// generator `f` chooses.
    ///
    /// Both draws use independent forks of the source. When shrinking, the
    /// dependent draw is simplified before the driving draw; driving
    /// candidates regenerate their dependent value from the recorded fork
    /// seed, so the search stays deterministic.
    pub fn bind<U, F>(self, f: F) -> Gen<U>
    where
        U: Clone + 'static,
        F: Fn(&T) -> Gen<U> + 'static,
    {
        let f: Rc<dyn Fn(&T) -> Gen<U>> = Rc::new(f);
        Gen::new(move |config, source| {
            let mut driving_source = source.fork();
            let dependent_seed = source.fork().seed();
            let driving = self.generate(config, &mut driving_source)?;
            bind_tree(&driving, Rc::clone(&f), dependent_seed, config.clone())
        })
    }

    /// Resample until the predicate holds, within the configured budget.
    ///
    /// Fails with [`SlowcheckError::FilterExhausted`] once the budget runs
    /// out; the property runner treats that as an inconclusive trial, not
    /// a counterexample. Shrink candidates are pruned by the same
    /// predicate.
    pub fn filter<F>(self, predicate: F) -> Gen<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        let predicate: Rc<dyn Fn(&T) -> bool> = Rc::new(predicate);
        Gen::new(move |config, source| {
            let budget = config.filter_retry_budget.max(1);
            for _ in 0..budget {
                let tree = self.generate(config, source)?;
                if let Some(kept) = tree.filter_rc(Rc::clone(&predicate)) {
                    return Ok(kept);
                }
            }
            Err(SlowcheckError::FilterExhausted { retries: budget })
        })
    }

    /// Identical generation behavior, but no shrink candidates.
    ///
    /// Used when a value cannot be meaningfully simplified, or to cap an
    /// expensive shrink search.
    pub fn no_shrink(self) -> Gen<T> {
        Gen::new(move |config, source| {
            let tree = self.generate(config, source)?;
            Ok(Tree::singleton(tree.value))
        })
    }
}

fn bind_tree<T, U>(
    driving: &Tree<T>,
    f: Rc<dyn Fn(&T) -> Gen<U>>,
    dependent_seed: Seed,
    config: Config,
) -> Result<Tree<U>>
where
    T: Clone + 'static,
    U: Clone + 'static,
{
    let mut dependent_source = Source::new(dependent_seed);
    let dependent = f(&driving.value).generate(&config, &mut dependent_source)?;
    let value = dependent.value.clone();
    let driving = driving.clone();
    Ok(Tree::new(value, move || {
        // Dependent candidates first: later draws are cheaper to hold fixed.
        let mut out = dependent.children();
        for candidate in driving.children() {
            if let Ok(rebound) = bind_tree(&candidate, Rc::clone(&f), dependent_seed, config.clone())
            {
                out.push(rebound);
            }
        }
        out
    }))
}

/// Primitive generators.
impl Gen<bool> {
    /// Generate a random boolean; `true` shrinks to `false`.
    pub fn bool() -> Self {
        Gen::new(|_config, source| {
            Ok(if source.next_bool() {
                Tree::with_children(true, vec![Tree::singleton(false)])
            } else {
                Tree::singleton(false)
            })
        })
    }
}

impl Gen<i64> {
    /// Generate an integer uniformly distributed over `[min, max]`.
    ///
    /// Fails immediately with [`SlowcheckError::InvalidRange`] when
    /// `min > max`, before any trial runs. Values shrink by binary
    /// halving toward the in-range bound nearest zero, so the search
    /// terminates in O(log range) steps.
    pub fn int_range(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(SlowcheckError::InvalidRange { min, max });
        }
        Ok(Self::int_range_unchecked(min, max))
    }

    pub(crate) fn int_range_unchecked(min: i64, max: i64) -> Self {
        let target = shrink_target(min, max);
        Gen::new(move |_config, source| {
            let value = source.next_int(min, max)?;
            Ok(Tree::unfold(value, move |&v| towards(target, v)))
        })
    }

    /// Generate a positive integer.
    pub fn positive() -> Self {
        Self::int_range_unchecked(1, i64::MAX)
    }

    /// Generate a natural number (including zero).
    pub fn natural() -> Self {
        Self::int_range_unchecked(0, i64::MAX)
    }
}

/// The simplest value in `[min, max]`: zero, clamped into range.
fn shrink_target(min: i64, max: i64) -> i64 {
    if min > 0 {
        min
    } else if max < 0 {
        max
    } else {
        0
    }
}

/// Shrink candidates for `value`, most aggressive first: the target
/// itself, then the value moved halfway toward it, quarter-way, and so
/// on. Every candidate lies strictly between target and value, so each
/// is in range and strictly closer to the target than its parent.
fn towards(target: i64, value: i64) -> Vec<i64> {
    if value == target {
        return Vec::new();
    }
    let mut candidates = vec![target];
    let diff = value as i128 - target as i128;
    let mut half = diff / 2;
    while half != 0 {
        let candidate = (value as i128 - half) as i64;
        if candidate != target {
            candidates.push(candidate);
        }
        half /= 2;
    }
    candidates
}

/// Collection generators.
impl<T> Gen<Vec<T>>
where
    T: Clone + 'static,
{
    /// Generate a vector of up to 16 elements.
    pub fn vec_of(element: Gen<T>) -> Gen<Vec<T>> {
        Self::vec_of_len_unchecked(element, 0, 16)
    }

    /// Generate a vector whose length is uniform over `[min_len, max_len]`.
    pub fn vec_of_len(element: Gen<T>, min_len: usize, max_len: usize) -> Result<Gen<Vec<T>>> {
        if min_len > max_len {
            return Err(SlowcheckError::InvalidRange {
                min: min_len as i64,
                max: max_len as i64,
            });
        }
        Ok(Self::vec_of_len_unchecked(element, min_len, max_len))
    }

    fn vec_of_len_unchecked(element: Gen<T>, min_len: usize, max_len: usize) -> Gen<Vec<T>> {
        Gen::new(move |config, source| {
            let len = source.next_int(min_len as i64, max_len as i64)? as usize;
            let mut elements = Vec::with_capacity(len);
            for _ in 0..len {
                let mut sub = source.fork();
                elements.push(element.generate(config, &mut sub)?);
            }
            Ok(vec_tree(elements, min_len))
        })
    }
}

/// Candidate order: drop one element (shorter is simpler), then shrink
/// elements in place, front to back.
fn vec_tree<T: Clone + 'static>(elements: Vec<Tree<T>>, min_len: usize) -> Tree<Vec<T>> {
    let value: Vec<T> = elements.iter().map(|tree| tree.value.clone()).collect();
    Tree::new(value, move || {
        let mut out = Vec::new();
        if elements.len() > min_len {
            for i in 0..elements.len() {
                let mut dropped = elements.clone();
                dropped.remove(i);
                out.push(vec_tree(dropped, min_len));
            }
        }
        for (i, element) in elements.iter().enumerate() {
            for candidate in element.children() {
                let mut replaced = elements.clone();
                replaced[i] = candidate;
                out.push(vec_tree(replaced, min_len));
            }
        }
        out
    })
}
