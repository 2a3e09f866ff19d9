//! Hydraulic-jump relations.

use hf_core::units::{Length, Ratio, m};

/// Sequent (conjugate) depth across a hydraulic jump, Bélanger equation:
/// y2 = 0.5·y1·(√(1 + 8·Fr1²) − 1).
///
/// Defined for any Fr1 ≥ 0 and applied unconditionally; a jump is only
/// physically realizable when Fr1 > 1, and suppressing the output in that
/// case is left to the presentation layer.
#[inline]
pub fn sequent_depth(upstream_depth: Length, froude_upstream: Ratio) -> Length {
    let fr = froude_upstream.value;
    m(0.5 * upstream_depth.value * ((1.0 + 8.0 * fr * fr).sqrt() - 1.0))
}

/// Energy dissipated across the jump, ΔE = (y2 − y1)³ / (4·y1·y2).
///
/// Requires y1 > 0 and y2 > 0; both hold by construction since y1 is a
/// validated input and the sequent depth is positive for Fr1 > 0.
#[inline]
pub fn energy_loss(upstream_depth: Length, sequent_depth: Length) -> Length {
    let y1 = upstream_depth.value;
    let y2 = sequent_depth.value;
    m((y2 - y1).powi(3) / (4.0 * y1 * y2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_core::units::unitless;

    #[test]
    fn sequent_depth_concrete_case() {
        // y1 = 0.2 m, Fr1 = 4.7595 gives y2 close to 1.25 m.
        let y2 = sequent_depth(m(0.2), unitless(4.7595));
        assert!((y2.value - 1.2499).abs() < 1e-3);
    }

    #[test]
    fn sequent_depth_recovers_upstream_at_unit_froude() {
        // At Fr1 = 1 the conjugate depth equals the upstream depth.
        let y2 = sequent_depth(m(0.4), unitless(1.0));
        assert!((y2.value - 0.4).abs() < 1e-12);
    }

    #[test]
    fn energy_loss_concrete_case() {
        let de = energy_loss(m(0.2), m(1.2499));
        assert!((de.value - 1.1574).abs() < 1e-3);
    }

    #[test]
    fn energy_loss_vanishes_without_depth_change() {
        assert_eq!(energy_loss(m(0.5), m(0.5)).value, 0.0);
    }
}
