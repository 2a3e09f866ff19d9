//! Error types for solver operations.

use thiserror::Error;

/// Errors that can occur while solving for the normal depth.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The configured bracket does not straddle the target discharge: the
    /// normal depth lies outside [low, high] for these inputs.
    #[error(
        "bracket [{low} m, {high} m] does not contain the normal depth for \
         Q = {target} m³/s (Qcalc spans [{q_low}, {q_high}] m³/s)"
    )]
    BracketFailure {
        low: f64,
        high: f64,
        q_low: f64,
        q_high: f64,
        target: f64,
    },

    /// A Manning evaluation produced a non-finite discharge.
    #[error("non-finite discharge at depth {depth} m: {value}")]
    NonFinite { depth: f64, value: f64 },
}

pub type SolverResult<T> = Result<T, SolverError>;
