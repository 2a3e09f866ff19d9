//! Property tests for the channel formulas.

use hf_channel::{
    area, critical_depth, energy_loss, hydraulic_radius, sequent_depth, specific_energy,
    wetted_perimeter,
};
use hf_core::numeric::{Tolerances, nearly_equal};
use hf_core::units::{m, m3ps, unitless};
use proptest::prelude::*;

proptest! {
    #[test]
    fn hydraulic_radius_is_area_over_perimeter(y in 0.01f64..10.0, b in 0.1f64..50.0) {
        let r = hydraulic_radius(m(y), m(b)).value;
        let expected = area(m(y), m(b)).value / wetted_perimeter(m(y), m(b)).value;
        prop_assert!(nearly_equal(r, expected, Tolerances::default()));
        // R = by/(b+2y) is bounded by the depth and by half the width.
        prop_assert!(r < y);
        prop_assert!(r < b / 2.0);
    }

    #[test]
    fn critical_depth_minimizes_specific_energy(q in 0.1f64..100.0, b in 0.1f64..50.0) {
        let yc = critical_depth(m3ps(q), m(b));
        let ec = specific_energy(yc, m3ps(q), m(b)).value;
        for factor in [0.8, 0.9, 1.1, 1.2] {
            let e = specific_energy(yc * factor, m3ps(q), m(b)).value;
            prop_assert!(ec <= e, "E(yc) = {ec} should not exceed E({factor}·yc) = {e}");
        }
    }

    #[test]
    fn supercritical_jump_raises_depth_and_dissipates(
        y1 in 0.01f64..5.0,
        fr in 1.01f64..10.0,
    ) {
        let y2 = sequent_depth(m(y1), unitless(fr));
        prop_assert!(y2.value > y1);
        prop_assert!(energy_loss(m(y1), y2).value > 0.0);
    }

    #[test]
    fn subcritical_conjugate_depth_stays_below_upstream(
        y1 in 0.01f64..5.0,
        fr in 0.0f64..0.99,
    ) {
        // Bélanger is still defined below Fr = 1; the conjugate depth just
        // drops below the upstream depth.
        let y2 = sequent_depth(m(y1), unitless(fr));
        prop_assert!(y2.value >= 0.0);
        prop_assert!(y2.value < y1);
    }
}
