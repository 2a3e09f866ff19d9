//! Flow state at a single depth.

use hf_channel::{
    area, froude_number, hydraulic_radius, specific_energy, velocity, wetted_perimeter,
};
use hf_core::units::{Length, VolumeRate};
use serde::{Deserialize, Serialize};

/// Derived flow properties at one depth for fixed (Q, b).
///
/// A pure function of (depth, Q, b): recomputed on demand, never cached
/// beyond the analysis call that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowState {
    /// Depth y (m)
    pub depth_m: f64,
    /// Flow area A (m²)
    pub area_m2: f64,
    /// Wetted perimeter P (m)
    pub wetted_perimeter_m: f64,
    /// Hydraulic radius R (m)
    pub hydraulic_radius_m: f64,
    /// Mean velocity V (m/s)
    pub velocity_mps: f64,
    /// Froude number
    pub froude: f64,
    /// Specific energy E (m)
    pub specific_energy_m: f64,
}

impl FlowState {
    /// Evaluate every flow property at `depth`.
    pub fn at(depth: Length, discharge: VolumeRate, width: Length) -> Self {
        let v = velocity(discharge, depth, width);
        Self {
            depth_m: depth.value,
            area_m2: area(depth, width).value,
            wetted_perimeter_m: wetted_perimeter(depth, width).value,
            hydraulic_radius_m: hydraulic_radius(depth, width).value,
            velocity_mps: v.value,
            froude: froude_number(v, depth).value,
            specific_energy_m: specific_energy(depth, discharge, width).value,
        }
    }
}
