//! Shared trait and types for the derivative model and the stepper.

use std::fmt;
use thiserror::Error;

/// Trait needed to be implemented by the user.
pub trait System<V> {
    /// System of ordinary differential equations.
    fn system(&self, t: f64, y: &V, dy: &mut V);
}

/// Enumeration of the errors raised for invalid simulation parameters.
///
/// All variants are detected before the first integration step; a failed run
/// never returns a partial time series.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Step size must be positive, got dt = {dt}.")]
    NonPositiveStep { dt: f64 },
    #[error("Total duration must be positive, got t_end = {t_end}.")]
    NonPositiveDuration { t_end: f64 },
    #[error("Parameter {name} must be finite, got {value}.")]
    NonFiniteParameter { name: &'static str, value: f64 },
    #[error("Unknown reaction scheme: {0:?}.")]
    UnknownScheme(String),
}

/// Contains some statistics of the integration.
#[derive(Clone, Copy, Debug)]
pub struct Stats {
    /// Number of derivative evaluations, four per accepted step.
    pub num_eval: u32,
    /// Number of steps taken. Fixed-step RK4 never rejects a step.
    pub accepted_steps: u32,
}

impl Stats {
    pub(crate) fn new() -> Stats {
        Stats {
            num_eval: 0,
            accepted_steps: 0,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Number of function evaluations: {}", self.num_eval)?;
        write!(f, "Number of accepted steps: {}", self.accepted_steps)
    }
}
