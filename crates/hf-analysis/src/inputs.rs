//! Raw channel inputs and their validation.

use crate::error::ValidationError;
use hf_core::Real;
use serde::{Deserialize, Serialize};

/// The five scalars an analysis starts from.
///
/// All fields must be finite and strictly positive; [`validate`] enforces
/// this and nothing downstream re-checks it. Advisory ranges (inputs
/// outside them are accepted but may push the normal depth outside the
/// default solver bracket): Q 0.1..100 m³/s, b 0.1..50 m, S0 1e-4..1e-1,
/// n 0.01..0.1, y1 0.01..10 m.
///
/// [`validate`]: ChannelInputs::validate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelInputs {
    /// Discharge Q (m³/s)
    pub q: Real,
    /// Channel width b (m)
    pub b: Real,
    /// Bed slope S0 (dimensionless)
    pub s0: Real,
    /// Manning roughness n (dimensionless)
    pub n: Real,
    /// Upstream depth y1 (m)
    pub y1: Real,
}

impl ChannelInputs {
    pub fn new(q: Real, b: Real, s0: Real, n: Real, y1: Real) -> Self {
        Self { q, b, s0, n, y1 }
    }

    fn fields(&self) -> [(&'static str, Real); 5] {
        [
            ("Q", self.q),
            ("b", self.b),
            ("S0", self.s0),
            ("n", self.n),
            ("y1", self.y1),
        ]
    }

    /// Check every field is finite and strictly positive.
    ///
    /// Fails on the first violation; values are never clamped.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(ValidationError {
                    field,
                    value,
                    constraint: "a finite number",
                });
            }
            if value <= 0.0 {
                return Err(ValidationError {
                    field,
                    value,
                    constraint: "> 0",
                });
            }
        }
        Ok(())
    }

    /// Advisory-range warnings. Out-of-range inputs still validate; the
    /// caller decides whether to surface these.
    pub fn warnings(&self) -> Vec<String> {
        const RANGES: [(Real, Real); 5] = [
            (0.1, 100.0),
            (0.1, 50.0),
            (1e-4, 1e-1),
            (0.01, 0.1),
            (0.01, 10.0),
        ];
        let mut warnings = Vec::new();
        for ((field, value), (lo, hi)) in self.fields().into_iter().zip(RANGES) {
            if value < lo || value > hi {
                warnings.push(format!(
                    "{field} = {value} is outside the advisory range {lo}..{hi}"
                ));
            }
        }
        warnings
    }
}
