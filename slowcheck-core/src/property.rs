//! Property definitions and the trial/shrink runner.

use crate::data::{Config, Seed, Source};
use crate::error::{PropertyResult, Result, ShrinkStep, SlowcheckError};
use crate::gen::Gen;
use crate::tree::Tree;
use std::fmt::Debug;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

enum TrialEval {
    Pass,
    Fail { assertion: Option<String> },
}

/// A property: a generator paired with a predicate over its values.
///
/// A run draws values until a trial fails, then searches the failing
/// value's shrink candidates for the smallest value that still fails,
/// and reports it together with the seed that reproduces the run.
pub struct Property<T> {
    generator: Gen<T>,
    predicate: Box<dyn Fn(&T) -> bool>,
    variable_name: Option<String>,
}

impl<T> Property<T>
where
    T: Debug + Clone + 'static,
{
    /// Create a property from a generator and a predicate.
    pub fn new<F>(generator: Gen<T>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        Property {
            generator,
            predicate: Box::new(predicate),
            variable_name: None,
        }
    }

    /// Create a property that checks a boolean condition.
    pub fn for_all<F>(generator: Gen<T>, condition: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        Property::new(generator, condition)
    }

    /// Create a property with a named variable for failure reports.
    pub fn for_all_named<F>(generator: Gen<T>, variable_name: &str, condition: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        let mut property = Property::new(generator, condition);
        property.variable_name = Some(variable_name.to_string());
        property
    }

    /// Run this property with the given configuration.
    pub fn run(&self, config: &Config) -> Result<PropertyResult> {
        self.run_internal(config, None, None, None)
    }

    /// Run with property name and module path recorded for reporting.
    pub fn run_with_context(
        &self,
        config: &Config,
        property_name: Option<&str>,
        module_path: Option<&str>,
    ) -> Result<PropertyResult> {
        self.run_internal(config, None, property_name, module_path)
    }

    /// Run, checking the cancellation flag between trials and between
    /// shrink candidates. Cancellation mid-shrink still reports the best
    /// counterexample found so far.
    pub fn run_cancellable(&self, config: &Config, cancel: &AtomicBool) -> Result<PropertyResult> {
        self.run_internal(config, Some(cancel), None, None)
    }

    fn run_internal(
        &self,
        config: &Config,
        cancel: Option<&AtomicBool>,
        property_name: Option<&str>,
        module_path: Option<&str>,
    ) -> Result<PropertyResult> {
        let root_seed = config.seed.unwrap_or_else(Seed::random);
        let mut seed = root_seed;
        let mut trials_run = 0usize;
        let mut consecutive_discards = 0usize;

        while trials_run < config.trials {
            if cancelled(cancel) {
                return Ok(PropertyResult::Aborted {
                    trials_run,
                    seed: root_seed,
                    property_name: property_name.map(String::from),
                    module_path: module_path.map(String::from),
                });
            }

            let (trial_seed, next_seed) = seed.split();
            seed = next_seed;
            let mut source = Source::new(trial_seed);

            let generated =
                catch_unwind(AssertUnwindSafe(|| self.generator.generate(config, &mut source)));
            let generated = match generated {
                Ok(result) => result,
                // A panic inside a mapping function is a mapping failure;
                // the trial is inconclusive, not a counterexample.
                Err(payload) => Err(SlowcheckError::MappingFailed {
                    reason: panic_message(&payload),
                }),
            };
            let tree = match generated {
                Ok(tree) => tree,
                Err(error) if error.is_discard() => {
                    consecutive_discards += 1;
                    if consecutive_discards >= config.discard_limit {
                        return Err(SlowcheckError::DegenerateGenerator {
                            discards: consecutive_discards,
                        });
                    }
                    continue;
                }
                Err(error) => return Err(error),
            };

            match self.eval(&tree.value) {
                TrialEval::Pass => {
                    trials_run += 1;
                    consecutive_discards = 0;
                }
                TrialEval::Fail { assertion } => {
                    let original = format!("{:?}", tree.value);
                    let (minimal, shrink_steps, shrinks_performed) =
                        self.shrink(&tree, config, cancel);
                    return Ok(PropertyResult::Failed {
                        counterexample: minimal,
                        original_counterexample: original,
                        trials_run: trials_run + 1,
                        shrinks_performed,
                        seed: root_seed,
                        property_name: property_name.map(String::from),
                        module_path: module_path.map(String::from),
                        assertion,
                        shrink_steps,
                    });
                }
            }
        }

        Ok(PropertyResult::Passed {
            trials_run,
            seed: root_seed,
            property_name: property_name.map(String::from),
            module_path: module_path.map(String::from),
        })
    }

    fn eval(&self, value: &T) -> TrialEval {
        match catch_unwind(AssertUnwindSafe(|| (self.predicate)(value))) {
            Ok(true) => TrialEval::Pass,
            Ok(false) => TrialEval::Fail {
                assertion: Some("Boolean Condition".to_string()),
            },
            // An exception during evaluation is evidence of a bug, not a
            // clean pass.
            Err(payload) => TrialEval::Fail {
                assertion: Some(format!("Predicate panicked: {}", panic_message(&payload))),
            },
        }
    }

    /// Greedy descent: the first candidate that still fails becomes the
    /// new current value and the search restarts from its own candidates.
    /// A round with no failing candidate ends the search.
    fn shrink(
        &self,
        tree: &Tree<T>,
        config: &Config,
        cancel: Option<&AtomicBool>,
    ) -> (String, Vec<ShrinkStep>, usize) {
        let mut current = tree.clone();
        let mut steps = vec![ShrinkStep {
            counterexample: format!("{:?}", current.value),
            step: 0,
            variable_name: self.variable_name.clone(),
        }];
        let mut accepted = 0usize;

        'descent: while accepted < config.shrink_limit {
            let candidates = match catch_unwind(AssertUnwindSafe(|| current.children())) {
                Ok(candidates) => candidates,
                // Candidate production failed; the current value stands.
                Err(_) => break,
            };
            for candidate in candidates {
                if cancelled(cancel) {
                    break 'descent;
                }
                if let TrialEval::Fail { .. } = self.eval(&candidate.value) {
                    accepted += 1;
                    steps.push(ShrinkStep {
                        counterexample: format!("{:?}", candidate.value),
                        step: accepted,
                        variable_name: self.variable_name.clone(),
                    });
                    current = candidate;
                    continue 'descent;
                }
            }
            break;
        }

        (format!("{:?}", current.value), steps, accepted)
    }
}

fn cancelled(cancel: Option<&AtomicBool>) -> bool {
    cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Create a property for a generator and predicate.
pub fn for_all<T, F>(generator: Gen<T>, condition: F) -> Property<T>
where
    T: Debug + Clone + 'static,
    F: Fn(&T) -> bool + 'static,
{
    Property::for_all(generator, condition)
}

/// Create a property with a named variable for failure reports.
pub fn for_all_named<T, F>(generator: Gen<T>, variable_name: &str, condition: F) -> Property<T>
where
    T: Debug + Clone + 'static,
    F: Fn(&T) -> bool + 'static,
{
    Property::for_all_named(generator, variable_name, condition)
}
