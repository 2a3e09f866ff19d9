//! Plain-text analysis report.

use hf_analysis::AnalysisResult;

const RULE: &str = "===========================================";

/// Render the fixed-width analysis report for one result.
///
/// Pure string assembly; printing it is the caller's job.
pub fn render_report(result: &AnalysisResult) -> String {
    let inputs = &result.inputs;
    let jump_note = if result.jump_expected {
        "Hydraulic jump WILL occur (Fr1 > 1)"
    } else {
        "Hydraulic jump will NOT occur (Fr1 <= 1)"
    };

    format!(
        "{RULE}\n\
         {:^43}\n\
         {RULE}\n\
         \n\
         INPUT PARAMETERS:\n\
         - Discharge (Q)       = {} m³/s\n\
         - Channel width (b)   = {} m\n\
         - Bed slope (S0)      = {}\n\
         - Manning's n         = {}\n\
         - Upstream depth (y1) = {} m\n\
         \n\
         NORMAL FLOW ANALYSIS:\n\
         - Normal depth (yn)   = {:.4} m\n\
         - Critical depth (yc) = {:.4} m\n\
         - Velocity (Vn)       = {:.3} m/s\n\
         - Froude number (Frn) = {:.3}\n\
         - Flow regime         = {} ({})\n\
         \n\
         HYDRAULIC JUMP ANALYSIS:\n\
         - Upstream Fr1        = {:.3}\n\
         - Sequent depth (y2)  = {:.4} m\n\
         - Energy loss (dE)    = {:.4} m\n\
         - Jump efficiency     = {:.1}%\n\
         - {}\n\
         \n\
         SPECIFIC ENERGY:\n\
         - E(yn) = {:.4} m\n\
         - E(yc) = {:.4} m\n\
         - E(y1) = {:.4} m\n\
         - E(y2) = {:.4} m\n\
         \n\
         {RULE}\n",
        "OPEN CHANNEL HYDRAULICS ANALYSIS",
        inputs.q,
        inputs.b,
        inputs.s0,
        inputs.n,
        inputs.y1,
        result.normal.depth_m,
        result.critical.depth_m,
        result.normal.velocity_mps,
        result.normal.froude,
        result.regime,
        result.regime_label,
        result.upstream.froude,
        result.sequent.depth_m,
        result.energy_loss_m,
        result.jump_efficiency * 100.0,
        jump_note,
        result.normal.specific_energy_m,
        result.critical.specific_energy_m,
        result.upstream.specific_energy_m,
        result.sequent.specific_energy_m,
    )
}
