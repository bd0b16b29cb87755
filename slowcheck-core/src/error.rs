//! Error types and property run results.

use crate::data::Seed;
use std::fmt;
use thiserror::Error;

/// Main error type for slowcheck property testing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlowcheckError {
    /// Malformed bounds passed to a numeric generator.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// Non-positive weight passed to a frequency builder.
    #[error("invalid frequency weight {weight}: weights must be positive")]
    InvalidWeight { weight: u64 },

    /// A frequency with no alternatives cannot generate anything.
    #[error("frequency has no alternatives")]
    EmptyFrequency,

    /// A filter predicate was never satisfied within its retry budget.
    #[error("filter predicate not satisfied after {retries} attempts")]
    FilterExhausted { retries: usize },

    /// A mapping function failed while producing a value.
    #[error("mapping failed during generation: {reason}")]
    MappingFailed { reason: String },

    /// Too many consecutive trials were discarded.
    #[error("generator is degenerate: {discards} consecutive trials discarded")]
    DegenerateGenerator { discards: usize },
}

impl SlowcheckError {
    /// Whether this error discards a single trial rather than aborting the run.
    pub(crate) fn is_discard(&self) -> bool {
        matches!(
            self,
            SlowcheckError::FilterExhausted { .. } | SlowcheckError::MappingFailed { .. }
        )
    }
}

/// Result type for slowcheck operations.
pub type Result<T> = std::result::Result<T, SlowcheckError>;

/// A shrinking step in the failure progression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShrinkStep {
    /// The counterexample value at this step.
    pub counterexample: String,
    /// The step number (0 = original, 1+ = shrink attempts).
    pub step: usize,
    /// Optional variable name for this input (e.g., "xs", "n", "input").
    pub variable_name: Option<String>,
}

/// Terminal record of a property check.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyResult {
    /// Every trial passed.
    Passed {
        trials_run: usize,
        seed: Seed,
        property_name: Option<String>,
        module_path: Option<String>,
    },

    /// A counterexample was found and minimized.
    Failed {
        /// The minimal counterexample, as displayable text.
        counterexample: String,
        /// The counterexample of the original failing trial.
        original_counterexample: String,
        trials_run: usize,
        shrinks_performed: usize,
        seed: Seed,
        property_name: Option<String>,
        module_path: Option<String>,
        assertion: Option<String>,
        /// The shrinking progression down to the minimal counterexample.
        shrink_steps: Vec<ShrinkStep>,
    },

    /// The check was cancelled between trials before any failure surfaced.
    Aborted {
        trials_run: usize,
        seed: Seed,
        property_name: Option<String>,
        module_path: Option<String>,
    },
}

impl PropertyResult {
    /// Whether the property passed all its trials.
    pub fn is_passed(&self) -> bool {
        matches!(self, PropertyResult::Passed { .. })
    }

    /// The seed the run started from, for exact replay.
    pub fn seed(&self) -> Seed {
        match self {
            PropertyResult::Passed { seed, .. }
            | PropertyResult::Failed { seed, .. }
            | PropertyResult::Aborted { seed, .. } => *seed,
        }
    }

    /// Number of trials evaluated before the run ended.
    pub fn trials_run(&self) -> usize {
        match self {
            PropertyResult::Passed { trials_run, .. }
            | PropertyResult::Failed { trials_run, .. }
            | PropertyResult::Aborted { trials_run, .. } => *trials_run,
        }
    }

    /// The original failing value, when the property failed.
    pub fn original_counterexample(&self) -> Option<&str> {
        match self {
            PropertyResult::Failed {
                original_counterexample,
                ..
            } => Some(original_counterexample),
            _ => None,
        }
    }

    /// The minimal failing value, when the property failed.
    pub fn minimal_counterexample(&self) -> Option<&str> {
        match self {
            PropertyResult::Failed { counterexample, .. } => Some(counterexample),
            _ => None,
        }
    }

    /// Number of accepted shrink steps between original and minimal value.
    pub fn shrink_step_count(&self) -> usize {
        match self {
            PropertyResult::Failed {
                shrinks_performed, ..
            } => *shrinks_performed,
            _ => 0,
        }
    }
}

impl fmt::Display for PropertyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyResult::Passed {
                trials_run,
                property_name,
                module_path,
                ..
            } => {
                if let Some(module) = module_path {
                    writeln!(f, "━━━ {} ━━━", module)?;
                }

                let prop_name = property_name.as_deref().unwrap_or("property");
                write!(f, "  ✓ {} passed {} tests.", prop_name, trials_run)
            }
            PropertyResult::Failed {
                counterexample,
                trials_run,
                shrinks_performed,
                seed,
                property_name,
                module_path,
                assertion,
                shrink_steps,
                ..
            } => {
                if let Some(module) = module_path {
                    writeln!(f, "━━━ {} ━━━", module)?;
                }

                let prop_name = property_name.as_deref().unwrap_or("property");
                writeln!(
                    f,
                    "  ✗ {} failed after {} tests and {} shrinks.",
                    prop_name, trials_run, shrinks_performed
                )?;

                if !shrink_steps.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "    Shrinking progression:")?;
                    for step in shrink_steps {
                        match (&step.variable_name, step.step) {
                            (Some(var_name), _) => writeln!(
                                f,
                                "      │ forAll {} = {} -- {}",
                                step.step, step.counterexample, var_name
                            )?,
                            (None, 0) => {
                                writeln!(f, "      │ Original: {}", step.counterexample)?
                            }
                            (None, n) => {
                                writeln!(f, "      │ Step {}: {}", n, step.counterexample)?
                            }
                        }
                    }
                    writeln!(f)?;
                }

                if let Some(assertion) = assertion {
                    writeln!(f, "    === {} ===", assertion)?;
                }

                writeln!(f, "    Minimal counterexample: {}", counterexample)?;
                write!(f, "    Reproduce with: {}", seed)
            }
            PropertyResult::Aborted {
                trials_run,
                property_name,
                module_path,
                ..
            } => {
                if let Some(module) = module_path {
                    writeln!(f, "━━━ {} ━━━", module)?;
                }

                let prop_name = property_name.as_deref().unwrap_or("property");
                write!(f, "  ⚐ {} aborted after {} tests", prop_name, trials_run)
            }
        }
    }
}
