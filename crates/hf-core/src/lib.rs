//! hf-core: stable foundation for hydroflow.
//!
//! Contains:
//! - units (uom SI types + constructors + gravity constant)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HfError, HfResult};
pub use numeric::*;
pub use units::*;
