//! # Chemical Kinetics
//! `chem_kinetics` simulates elementary reaction schemes (zero-, first- and
//! second-order decay, consecutive A→B→C, parallel A→B / A→C) by integrating
//! the corresponding rate equations with a fixed-step fourth-order
//! Runge-Kutta method.

// Re-export from external crate
use nalgebra as na;
pub use crate::na::{DVector, OVector, Vector1, Vector3};

// Declare modules
pub mod reaction;
pub mod report;
pub mod rk4;
pub mod shared;
pub mod simulate;

pub use reaction::{ReactionScheme, ReactionSystem};
pub use rk4::Rk4;
pub use simulate::{simulate, SimulationParams, Solution};

pub use shared::{DomainError, Stats, System};
