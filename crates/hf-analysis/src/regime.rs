//! Flow-regime classification.

use hf_core::Real;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flow regime, classified from the normal-depth Froude number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    Subcritical,
    Critical,
    Supercritical,
}

impl Regime {
    /// Human-readable status text for the regime.
    pub fn label(self) -> &'static str {
        match self {
            Regime::Subcritical => "Tranquil Flow",
            Regime::Critical => "Critical Flow",
            Regime::Supercritical => "Rapid Flow",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Regime::Subcritical => "Subcritical",
            Regime::Critical => "Critical",
            Regime::Supercritical => "Supercritical",
        };
        write!(f, "{name}")
    }
}

/// Near-critical band around Fr = 1.
///
/// The 0.9/1.1 band is this tool's long-standing convention, not standard
/// hydraulic theory (which puts the boundary exactly at Fr = 1), so it
/// stays configurable.
#[derive(Debug, Clone, Copy)]
pub struct RegimeThresholds {
    /// Below this the flow counts as subcritical
    pub lower: Real,
    /// Above this the flow counts as supercritical
    pub upper: Real,
}

impl Default for RegimeThresholds {
    fn default() -> Self {
        Self {
            lower: 0.9,
            upper: 1.1,
        }
    }
}

/// Classify the regime from the normal-depth Froude number.
pub fn classify(froude_normal: Real, thresholds: &RegimeThresholds) -> Regime {
    if froude_normal < thresholds.lower {
        Regime::Subcritical
    } else if froude_normal > thresholds.upper {
        Regime::Supercritical
    } else {
        Regime::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive() {
        let t = RegimeThresholds::default();
        assert_eq!(classify(0.89, &t), Regime::Subcritical);
        assert_eq!(classify(0.9, &t), Regime::Critical);
        assert_eq!(classify(1.1, &t), Regime::Critical);
        assert_eq!(classify(1.11, &t), Regime::Supercritical);
    }

    #[test]
    fn custom_thresholds_shift_the_band() {
        let t = RegimeThresholds {
            lower: 1.0,
            upper: 1.0,
        };
        assert_eq!(classify(0.999, &t), Regime::Subcritical);
        assert_eq!(classify(1.0, &t), Regime::Critical);
        assert_eq!(classify(1.001, &t), Regime::Supercritical);
    }

    #[test]
    fn labels_match_regimes() {
        assert_eq!(Regime::Subcritical.label(), "Tranquil Flow");
        assert_eq!(Regime::Critical.label(), "Critical Flow");
        assert_eq!(Regime::Supercritical.label(), "Rapid Flow");
        assert_eq!(Regime::Supercritical.to_string(), "Supercritical");
    }
}
