//! Bisection root finding on the Manning equation.

use crate::error::{SolverError, SolverResult};
use hf_channel::manning_discharge;
use hf_core::Real;
use hf_core::numeric::ensure_finite;
use hf_core::units::{Length, VolumeRate, m};

/// Bisection solver configuration.
///
/// The default bracket and tolerance are tuned for the documented input
/// ranges (Q in 0.1..100 m³/s, b in 0.1..50 m, S0 in 1e-4..1e-1, n in
/// 0.01..0.1). Inputs whose normal depth falls outside the bracket are
/// reported as [`SolverError::BracketFailure`] rather than bisected to a
/// wrong midpoint.
#[derive(Debug, Clone, Copy)]
pub struct BisectionConfig {
    /// Lower bracket depth (m)
    pub bracket_low: Real,
    /// Upper bracket depth (m)
    pub bracket_high: Real,
    /// Absolute tolerance on the discharge mismatch (m³/s)
    pub tolerance: Real,
    /// Iteration cap; reaching it is a soft deadline, not a failure
    pub max_iterations: usize,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            bracket_low: 0.001,
            bracket_high: 100.0,
            tolerance: 1e-4,
            max_iterations: 100,
        }
    }
}

/// Bisection outcome.
#[derive(Debug, Clone, Copy)]
pub struct BisectionResult {
    /// Normal depth estimate
    pub depth: Length,
    /// |Qcalc(depth) − Q| at exit (m³/s)
    pub discharge_error: Real,
    /// Iterations performed
    pub iterations: usize,
    /// Whether the tolerance was met before the iteration cap
    pub converged: bool,
}

/// Solve `manning_discharge(y) = Q` for the normal depth y.
///
/// Tie-break: Qcalc(mid) > Q puts the root below mid. If the iteration cap
/// is reached inside a valid bracket, the final midpoint is returned with
/// `converged = false` instead of an error.
pub fn solve_normal_depth(
    discharge: VolumeRate,
    roughness: Real,
    slope: Real,
    width: Length,
    config: &BisectionConfig,
) -> SolverResult<BisectionResult> {
    let target = discharge.value;
    let q_at = |depth: Real| manning_discharge(m(depth), roughness, slope, width).value;

    let q_low = q_at(config.bracket_low);
    let q_high = q_at(config.bracket_high);
    for (depth, value) in [(config.bracket_low, q_low), (config.bracket_high, q_high)] {
        ensure_finite(value, "Manning discharge")
            .map_err(|_| SolverError::NonFinite { depth, value })?;
    }

    // Qcalc is strictly increasing in depth, so checking the bracket ends is
    // enough to guarantee a unique root inside.
    if target < q_low || target > q_high {
        return Err(SolverError::BracketFailure {
            low: config.bracket_low,
            high: config.bracket_high,
            q_low,
            q_high,
            target,
        });
    }

    let mut low = config.bracket_low;
    let mut high = config.bracket_high;

    for iteration in 0..config.max_iterations {
        let mid = 0.5 * (low + high);
        let q_mid = q_at(mid);
        let discharge_error = (q_mid - target).abs();

        if discharge_error < config.tolerance {
            tracing::debug!(depth = mid, iterations = iteration, "normal depth converged");
            return Ok(BisectionResult {
                depth: m(mid),
                discharge_error,
                iterations: iteration,
                converged: true,
            });
        }

        if q_mid > target {
            high = mid;
        } else {
            low = mid;
        }
    }

    // Soft deadline: hand back the final midpoint rather than erroring.
    let mid = 0.5 * (low + high);
    let discharge_error = (q_at(mid) - target).abs();
    tracing::debug!(
        depth = mid,
        discharge_error,
        "iteration cap reached before tolerance"
    );
    Ok(BisectionResult {
        depth: m(mid),
        discharge_error,
        iterations: config.max_iterations,
        converged: false,
    })
}
