//! Error types for analysis operations.

use hf_solver::SolverError;
use thiserror::Error;

/// A single input failed validation.
///
/// Carries the offending field, its value, and the violated constraint;
/// surfaced to the caller verbatim, never recovered internally.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field} must be {constraint} (got {value})")]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f64,
    pub constraint: &'static str,
}

/// Why an analysis failed. No partial result accompanies either variant.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("normal-depth solve failed: {0}")]
    Solver(#[from] SolverError),
}
