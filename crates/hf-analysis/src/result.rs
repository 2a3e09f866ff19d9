//! Analysis result records.

use crate::inputs::ChannelInputs;
use crate::regime::Regime;
use crate::state::FlowState;
use serde::{Deserialize, Serialize};

/// Solver metadata attached to a result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolverSummary {
    /// Bisection iterations performed
    pub iterations: usize,
    /// Whether the discharge tolerance was met
    pub converged: bool,
    /// |Qcalc(yn) − Q| at exit (m³/s)
    pub discharge_error_m3ps: f64,
}

/// Immutable outcome of one analysis, owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The validated inputs this result was derived from
    pub inputs: ChannelInputs,
    /// Flow state at the normal depth yn
    pub normal: FlowState,
    /// Flow state at the critical depth yc
    pub critical: FlowState,
    /// Flow state at the upstream depth y1
    pub upstream: FlowState,
    /// Flow state at the sequent depth y2
    pub sequent: FlowState,
    /// Energy dissipated across the jump, ΔE (m)
    pub energy_loss_m: f64,
    /// ΔE / E(y1)
    pub jump_efficiency: f64,
    /// Whether a jump is physically expected (Fr1 > 1). The jump figures
    /// are computed either way; renderers decide whether to show them.
    pub jump_expected: bool,
    /// Regime classified from the normal-depth Froude number
    pub regime: Regime,
    /// Human-readable status text for the regime
    pub regime_label: String,
    pub solver: SolverSummary,
}
