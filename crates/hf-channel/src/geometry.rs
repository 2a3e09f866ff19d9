//! Rectangular cross-section geometry.

use hf_core::units::{Area, Length};

/// Flow area, A = b·y.
#[inline]
pub fn area(depth: Length, width: Length) -> Area {
    width * depth
}

/// Wetted perimeter, P = b + 2y.
#[inline]
pub fn wetted_perimeter(depth: Length, width: Length) -> Length {
    width + depth * 2.0
}

/// Hydraulic radius, R = A / P.
///
/// Total for depth > 0 and width > 0; callers must reject non-positive
/// inputs before calling, the geometry functions do not re-check them.
#[inline]
pub fn hydraulic_radius(depth: Length, width: Length) -> Length {
    area(depth, width) / wetted_perimeter(depth, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_core::numeric::{Tolerances, nearly_equal};
    use hf_core::units::m;

    #[test]
    fn rectangular_section_basics() {
        let y = m(0.2);
        let b = m(1.5);
        assert_eq!(area(y, b).value, 0.3);
        assert_eq!(wetted_perimeter(y, b).value, 1.9);
        assert!(nearly_equal(
            hydraulic_radius(y, b).value,
            0.3 / 1.9,
            Tolerances::default()
        ));
    }

    #[test]
    fn hydraulic_radius_approaches_half_width_in_deep_flow() {
        let b = m(1.5);
        let r = hydraulic_radius(m(1.0e6), b).value;
        assert!(r < b.value / 2.0);
        assert!((r - b.value / 2.0).abs() < 1e-5);
    }
}
