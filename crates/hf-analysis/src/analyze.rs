//! The analysis orchestrator.

use crate::error::AnalysisError;
use crate::inputs::ChannelInputs;
use crate::regime::{RegimeThresholds, classify};
use crate::result::{AnalysisResult, SolverSummary};
use crate::state::FlowState;
use hf_channel::{critical_depth, energy_loss, sequent_depth};
use hf_core::units::{m, m3ps, unitless};
use hf_solver::{BisectionConfig, solve_normal_depth};

/// Knobs for a single analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisConfig {
    pub solver: BisectionConfig,
    pub thresholds: RegimeThresholds,
}

/// Run one full analysis: validate, compute, classify, assemble.
///
/// Fully synchronous and deterministic. The first invalid input or a
/// solver bracket failure aborts the call with no partial result, and a
/// failed analysis is never retried internally.
pub fn analyze(
    inputs: &ChannelInputs,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    inputs.validate()?;

    let q = m3ps(inputs.q);
    let b = m(inputs.b);
    let y1 = m(inputs.y1);

    let solved = solve_normal_depth(q, inputs.n, inputs.s0, b, &config.solver)?;
    let yn = solved.depth;
    let yc = critical_depth(q, b);

    let normal = FlowState::at(yn, q, b);
    let upstream = FlowState::at(y1, q, b);

    // Ordering constraint: y2 needs Fr1, and the energy loss needs y2.
    let y2 = sequent_depth(y1, unitless(upstream.froude));
    let de = energy_loss(y1, y2);

    let critical = FlowState::at(yc, q, b);
    let sequent = FlowState::at(y2, q, b);

    let regime = classify(normal.froude, &config.thresholds);
    tracing::debug!(
        yn = normal.depth_m,
        yc = critical.depth_m,
        froude_normal = normal.froude,
        regime = %regime,
        "analysis complete"
    );

    Ok(AnalysisResult {
        inputs: *inputs,
        normal,
        critical,
        upstream,
        sequent,
        energy_loss_m: de.value,
        jump_efficiency: de.value / upstream.specific_energy_m,
        jump_expected: upstream.froude > 1.0,
        regime,
        regime_label: regime.label().to_string(),
        solver: SolverSummary {
            iterations: solved.iterations,
            converged: solved.converged,
            discharge_error_m3ps: solved.discharge_error,
        },
    })
}
