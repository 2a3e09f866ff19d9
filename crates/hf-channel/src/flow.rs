//! Flow properties at a given depth.

use crate::geometry::area;
use hf_core::units::constants::G_MPS2;
use hf_core::units::{Length, Ratio, Velocity, VolumeRate, m, unitless};

/// Mean velocity, V = Q / A.
#[inline]
pub fn velocity(discharge: VolumeRate, depth: Length, width: Length) -> Velocity {
    discharge / area(depth, width)
}

/// Froude number, Fr = V / √(g·y).
#[inline]
pub fn froude_number(velocity: Velocity, depth: Length) -> Ratio {
    unitless(velocity.value / (G_MPS2 * depth.value).sqrt())
}

/// Specific energy relative to the channel bed, E = y + Q² / (2·g·A²).
#[inline]
pub fn specific_energy(depth: Length, discharge: VolumeRate, width: Length) -> Length {
    let a = area(depth, width).value;
    m(depth.value + discharge.value.powi(2) / (2.0 * G_MPS2 * a.powi(2)))
}

/// Critical depth, yc = ∛(Q² / (g·b²)).
///
/// Closed-form minimizer of specific energy for a rectangular section; no
/// iteration involved.
#[inline]
pub fn critical_depth(discharge: VolumeRate, width: Length) -> Length {
    m((discharge.value.powi(2) / (G_MPS2 * width.value.powi(2))).cbrt())
}
