//! hf-analysis: open-channel analysis orchestration.
//!
//! Validates raw inputs, runs the normal-depth solver and the closed-form
//! hydraulics, classifies the flow regime, and assembles one immutable
//! [`AnalysisResult`] per call. Every call is independent and reentrant;
//! nothing is cached or mutated in place.

pub mod analyze;
pub mod error;
pub mod inputs;
pub mod regime;
pub mod result;
pub mod state;

pub use analyze::{AnalysisConfig, analyze};
pub use error::{AnalysisError, ValidationError};
pub use inputs::ChannelInputs;
pub use regime::{Regime, RegimeThresholds, classify};
pub use result::{AnalysisResult, SolverSummary};
pub use state::FlowState;
