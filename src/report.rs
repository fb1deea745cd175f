//! Diagnostic commentary on a simulation run.
//!
//! An external text-generation service can be plugged in through the
//! [`Commentator`] trait. Any failure of that service falls back to
//! [`local_summary`], a deterministic report built from the parameters
//! alone, so the caller always receives usable text.

use std::fmt::Write;

use thiserror::Error;

use crate::reaction::ReactionScheme;
use crate::simulate::SimulationParams;

/// Enumeration of the ways an external commentary service may fail.
#[derive(Debug, Error)]
pub enum ExternalServiceError {
    #[error("Commentary request failed: {0}.")]
    Transport(String),
    #[error("Commentary service rejected the credentials.")]
    Unauthorized,
    #[error("Commentary service quota exhausted.")]
    QuotaExceeded,
}

/// An external service producing free-text commentary on a parameter set.
pub trait Commentator {
    fn comment(&self, params: &SimulationParams) -> Result<String, ExternalServiceError>;
}

/// Deterministic summary derived solely from the simulation parameters.
pub fn local_summary(params: &SimulationParams) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Kinetics summary ({} reaction)", params.scheme);
    if params.scheme.uses_k2() {
        let _ = writeln!(
            out,
            "Rate constants: k1 = {}, k2 = {}. Initial concentration: {} mol/L.",
            params.k1, params.k2, params.ca0
        );
    } else {
        let _ = writeln!(
            out,
            "Rate constant: k1 = {}. Initial concentration: {} mol/L.",
            params.k1, params.ca0
        );
    }
    let meaning = match params.scheme {
        ReactionScheme::ZeroOrder => {
            "The rate is independent of concentration; [A] falls linearly until the reactant is exhausted.".to_string()
        }
        ReactionScheme::FirstOrder => format!(
            "Exponential decay with a constant half-life of ln(2)/k1 = {:.4} s.",
            std::f64::consts::LN_2 / params.k1
        ),
        ReactionScheme::SecondOrder => {
            "The rate scales with [A]^2, so the decay slows markedly as the reactant is consumed.".to_string()
        }
        ReactionScheme::Consecutive => {
            "A converts to C through the intermediate B, which rises, peaks, and drains as k2 takes over.".to_string()
        }
        ReactionScheme::Parallel => format!(
            "A branches into B and C along independent pathways; the yield ratio [B]/[C] approaches k1/k2 = {:.4}.",
            params.k1 / params.k2
        ),
    };
    let _ = writeln!(out, "{}", meaning);
    out
}

/// Produces commentary for a run, preferring the external service.
///
/// The external path never surfaces an error: on any failure the local
/// summary is returned instead. No retries are attempted.
pub fn report(commentator: Option<&dyn Commentator>, params: &SimulationParams) -> String {
    match commentator {
        Some(service) => service
            .comment(params)
            .unwrap_or_else(|_| local_summary(params)),
        None => local_summary(params),
    }
}
