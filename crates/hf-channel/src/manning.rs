//! Manning uniform-flow equation.

use crate::geometry::{area, hydraulic_radius};
use hf_core::Real;
use hf_core::units::{Length, VolumeRate, m3ps};

/// Manning discharge for a rectangular section,
/// Qcalc = (1/n)·A·R^(2/3)·√S0.
///
/// Strictly increasing in depth for depth > 0, which is what makes
/// bisection on depth well posed (see `hf-solver`).
pub fn manning_discharge(depth: Length, roughness: Real, slope: Real, width: Length) -> VolumeRate {
    let a = area(depth, width).value;
    let r = hydraulic_radius(depth, width).value;
    m3ps((1.0 / roughness) * a * r.powf(2.0 / 3.0) * slope.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_core::units::m;

    #[test]
    fn discharge_increases_with_depth() {
        let mut prev = 0.0;
        for depth in [0.1, 0.5, 1.0, 2.0, 5.0] {
            let q = manning_discharge(m(depth), 0.025, 0.001, m(1.5)).value;
            assert!(q > prev, "Q({depth}) = {q} should exceed {prev}");
            prev = q;
        }
    }

    #[test]
    fn discharge_concrete_value() {
        // (1/0.025) * 0.75 * (0.75/2.5)^(2/3) * sqrt(0.001)
        let q = manning_discharge(m(0.5), 0.025, 0.001, m(1.5)).value;
        let expected = 40.0 * 0.75 * (0.75f64 / 2.5).powf(2.0 / 3.0) * 0.001f64.sqrt();
        assert!((q - expected).abs() < 1e-12);
    }
}
