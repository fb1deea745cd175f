//! High-level entry point tying a reaction scheme to the RK4 stepper.

use nalgebra::DVector;

use crate::reaction::{ReactionScheme, ReactionSystem};
use crate::rk4::Rk4;
use crate::shared::{DomainError, Stats};

/// Full parameter set for one simulation run, passed explicitly by the
/// caller. k2 is ignored by the single-species schemes.
#[derive(Clone, Copy, Debug)]
pub struct SimulationParams {
    pub scheme: ReactionScheme,
    pub k1: f64,
    pub k2: f64,
    /// Initial reactant concentration; the other species start at zero.
    pub ca0: f64,
    /// Total simulated duration.
    pub t_end: f64,
    /// Nominal step size; the run produces floor(t_end / dt) samples.
    pub dt: f64,
}

impl SimulationParams {
    /// Checks the parameters before any computation is performed.
    pub fn validate(&self) -> Result<(), DomainError> {
        for &(name, value) in &[
            ("k1", self.k1),
            ("k2", self.k2),
            ("ca0", self.ca0),
            ("t_end", self.t_end),
            ("dt", self.dt),
        ] {
            if !value.is_finite() {
                return Err(DomainError::NonFiniteParameter { name, value });
            }
        }
        if self.dt <= 0.0 {
            return Err(DomainError::NonPositiveStep { dt: self.dt });
        }
        if self.t_end <= 0.0 {
            return Err(DomainError::NonPositiveDuration { t_end: self.t_end });
        }
        Ok(())
    }
}

/// Concentration-vs-time series produced by one run.
///
/// The caller owns the result outright; nothing in the crate mutates it
/// after creation.
pub struct Solution {
    scheme: ReactionScheme,
    time: Vec<f64>,
    concentrations: Vec<DVector<f64>>,
    stats: Stats,
}

impl Solution {
    /// Time points, evenly spaced over [0, t_end].
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// One concentration row per time point, columns in the order given by
    /// [`Solution::labels`].
    pub fn concentrations(&self) -> &[DVector<f64>] {
        &self.concentrations
    }

    pub fn scheme(&self) -> ReactionScheme {
        self.scheme
    }

    /// Number of species columns.
    pub fn species(&self) -> usize {
        self.scheme.species()
    }

    /// Column labels for plotting or reporting.
    pub fn labels(&self) -> &'static [&'static str] {
        self.scheme.labels()
    }

    /// Number of samples in the series.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
}

/// Runs a fixed-step RK4 integration of the selected reaction scheme.
///
/// The first species starts at `ca0`, all others at zero. A degenerate
/// sample count (0 or 1) yields a correspondingly short solution rather
/// than an error.
pub fn simulate(params: &SimulationParams) -> Result<Solution, DomainError> {
    params.validate()?;

    let mut y0 = DVector::zeros(params.scheme.species());
    y0[0] = params.ca0;

    let system = ReactionSystem::new(params.scheme, params.k1, params.k2);
    let mut stepper = Rk4::new(system, y0, params.t_end, params.dt);
    let stats = stepper.integrate()?;
    let (time, concentrations) = stepper.into_results();

    Ok(Solution {
        scheme: params.scheme,
        time,
        concentrations,
        stats,
    })
}
