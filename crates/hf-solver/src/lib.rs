//! Normal-depth solver for rectangular open channels.
//!
//! Solves the Manning equation Qcalc(y) = Q for the uniform-flow depth by
//! bisection. Qcalc is strictly increasing in depth, so the root inside a
//! valid bracket is unique and convergence is monotone.

pub mod bisection;
pub mod error;

pub use bisection::{BisectionConfig, BisectionResult, solve_normal_depth};
pub use error::{SolverError, SolverResult};
