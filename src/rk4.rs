//! Explicit Runge-Kutta method of order 4 with fixed step size.

use crate::shared::{DomainError, Stats, System};

use nalgebra::{allocator::Allocator, storage::Storage, DefaultAllocator, Dim, OVector, Scalar};
use num_traits::Zero;
use simba::scalar::{ClosedAdd, ClosedMul, ClosedNeg, ClosedSub, SubsetOf};

/// Structure containing the parameters for the numerical integration.
///
/// Integration always starts at t = 0 and produces `floor(t_end / dt)`
/// evenly spaced samples over `[0, t_end]`, the first of which is the
/// initial state. The stage formulas use the actual inter-sample spacing
/// `t_end / (n - 1)` rather than the nominal `dt`, so the last sample lands
/// exactly on `t_end`.
pub struct Rk4<V, F>
where
    F: System<V>,
{
    f: F,
    y: V,
    t_end: f64,
    step_size: f64,
    t_out: Vec<f64>,
    y_out: Vec<V>,
    stats: Stats,
}

impl<T, D: Dim, F> Rk4<OVector<T, D>, F>
where
    f64: From<T>,
    T: Copy + SubsetOf<f64> + Scalar + ClosedAdd + ClosedMul + ClosedSub + ClosedNeg + Zero,
    F: System<OVector<T, D>>,
    OVector<T, D>: std::ops::Mul<f64, Output = OVector<T, D>>,
    DefaultAllocator: Allocator<T, D>,
{
    /// Default initializer for the structure
    ///
    /// # Arguments
    ///
    /// * `f`           - Structure implementing the System<V> trait
    /// * `y`           - Initial value of the dependent variable(s)
    /// * `t_end`       - Total simulated duration
    /// * `step_size`   - Nominal step size; the sample count is floor(t_end / step_size)
    ///
    pub fn new(f: F, y: OVector<T, D>, t_end: f64, step_size: f64) -> Self {
        Rk4 {
            f,
            y,
            t_end,
            step_size,
            t_out: Vec::new(),
            y_out: Vec::new(),
            stats: Stats::new(),
        }
    }

    /// Core integration method.
    ///
    /// A degenerate sample count (0 or 1) is not an error: the output is
    /// empty or holds only the initial state. Negative components arising
    /// from numerical overshoot are stored as-is; clamping is the derivative
    /// model's concern.
    pub fn integrate(&mut self) -> Result<Stats, DomainError> {
        for &(name, value) in &[("dt", self.step_size), ("t_end", self.t_end)] {
            if !value.is_finite() {
                return Err(DomainError::NonFiniteParameter { name, value });
            }
        }
        if self.step_size <= 0.0 {
            return Err(DomainError::NonPositiveStep {
                dt: self.step_size,
            });
        }
        if self.t_end <= 0.0 {
            return Err(DomainError::NonPositiveDuration { t_end: self.t_end });
        }

        let num_samples = (self.t_end / self.step_size).floor() as usize;
        if num_samples == 0 {
            return Ok(self.stats);
        }

        self.t_out.reserve(num_samples);
        self.y_out.reserve(num_samples);

        // Save initial values
        self.t_out.push(0.0);
        self.y_out.push(self.y.clone());
        if num_samples == 1 {
            return Ok(self.stats);
        }

        let h = self.t_end / (num_samples - 1) as f64;
        for i in 1..num_samples {
            let y_new = self.step((i - 1) as f64 * h, h);

            // Time points come from the index, not from accumulation.
            self.t_out.push(i as f64 * h);
            self.y_out.push(y_new.clone());

            self.y = y_new;

            self.stats.num_eval += 4;
            self.stats.accepted_steps += 1;
        }
        Ok(self.stats)
    }

    /// Performs one step of the Runge-Kutta 4 method.
    fn step(&self, t: f64, h: f64) -> OVector<T, D> {
        let (rows, cols) = self.y.data.shape();
        let half = h / 2.0;

        let mut k1 = OVector::zeros_generic(rows, cols);
        let mut k2 = OVector::zeros_generic(rows, cols);
        let mut k3 = OVector::zeros_generic(rows, cols);
        let mut k4 = OVector::zeros_generic(rows, cols);

        self.f.system(t, &self.y, &mut k1);
        self.f
            .system(t + half, &(self.y.clone() + k1.clone() * half), &mut k2);
        self.f
            .system(t + half, &(self.y.clone() + k2.clone() * half), &mut k3);
        self.f
            .system(t + h, &(self.y.clone() + k3.clone() * h), &mut k4);

        &self.y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0)
    }

    /// Getter for the time output.
    pub fn t_out(&self) -> &Vec<f64> {
        &self.t_out
    }

    /// Getter for the dependent variables' output.
    pub fn y_out(&self) -> &Vec<OVector<T, D>> {
        &self.y_out
    }

    /// Consumes the stepper and hands the output arrays to the caller.
    pub fn into_results(self) -> (Vec<f64>, Vec<OVector<T, D>>) {
        (self.t_out, self.y_out)
    }
}
