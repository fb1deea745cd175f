//! Reaction schemes and their rate laws.

use std::fmt;
use std::str::FromStr;

use nalgebra::DVector;

use crate::shared::{DomainError, System};

/// The five supported reaction schemes.
///
/// The single-species schemes track only the reactant A; `Consecutive`
/// (A → B → C) and `Parallel` (A → B, A → C) track three species in the
/// column order reactant, intermediate/product, product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionScheme {
    ZeroOrder,
    FirstOrder,
    SecondOrder,
    Consecutive,
    Parallel,
}

impl ReactionScheme {
    /// Number of species tracked by the scheme.
    pub fn species(self) -> usize {
        match self {
            ReactionScheme::ZeroOrder | ReactionScheme::FirstOrder | ReactionScheme::SecondOrder => {
                1
            }
            ReactionScheme::Consecutive | ReactionScheme::Parallel => 3,
        }
    }

    /// Plotting labels for the concentration columns, in column order.
    pub fn labels(self) -> &'static [&'static str] {
        if self.species() == 1 {
            &["Reactant"]
        } else {
            &["Reactant", "Intermediate/Product", "Product"]
        }
    }

    /// Whether the scheme makes use of the second rate constant k2.
    pub fn uses_k2(self) -> bool {
        self.species() > 1
    }
}

impl fmt::Display for ReactionScheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ReactionScheme::ZeroOrder => "zero-order",
            ReactionScheme::FirstOrder => "first-order",
            ReactionScheme::SecondOrder => "second-order",
            ReactionScheme::Consecutive => "consecutive",
            ReactionScheme::Parallel => "parallel",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ReactionScheme {
    type Err = DomainError;

    /// Parses a scheme tag. An unrecognized tag is an explicit error, never
    /// a silently ignored scheme.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero-order" | "zero_order" | "zeroorder" => Ok(ReactionScheme::ZeroOrder),
            "first-order" | "first_order" | "firstorder" => Ok(ReactionScheme::FirstOrder),
            "second-order" | "second_order" | "secondorder" => Ok(ReactionScheme::SecondOrder),
            "consecutive" => Ok(ReactionScheme::Consecutive),
            "parallel" => Ok(ReactionScheme::Parallel),
            _ => Err(DomainError::UnknownScheme(s.to_string())),
        }
    }
}

/// Rate equations of a reaction scheme, ready to hand to the stepper.
///
/// Concentration reads clamp negative values to zero, so a small numerical
/// overshoot below zero contributes no rate. The state itself is never
/// modified. Pure; evaluation has no side effects and cannot fail.
pub struct ReactionSystem {
    scheme: ReactionScheme,
    k1: f64,
    k2: f64,
}

impl ReactionSystem {
    pub fn new(scheme: ReactionScheme, k1: f64, k2: f64) -> Self {
        ReactionSystem { scheme, k1, k2 }
    }
}

impl System<DVector<f64>> for ReactionSystem {
    fn system(&self, _t: f64, y: &DVector<f64>, dy: &mut DVector<f64>) {
        let a = y[0].max(0.0);
        match self.scheme {
            ReactionScheme::ZeroOrder => {
                dy[0] = if a > 0.0 { -self.k1 } else { 0.0 };
            }
            ReactionScheme::FirstOrder => {
                dy[0] = -self.k1 * a;
            }
            ReactionScheme::SecondOrder => {
                dy[0] = -self.k1 * a * a;
            }
            ReactionScheme::Consecutive => {
                let b = y[1].max(0.0);
                dy[0] = -self.k1 * a;
                dy[1] = self.k1 * a - self.k2 * b;
                dy[2] = self.k2 * b;
            }
            ReactionScheme::Parallel => {
                dy[0] = -(self.k1 + self.k2) * a;
                dy[1] = self.k1 * a;
                dy[2] = self.k2 * a;
            }
        }
    }
}
