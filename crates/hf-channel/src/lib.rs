//! hf-channel: rectangular open-channel hydraulics formulas.
//!
//! Closed-form relations for a rectangular cross-section: geometry,
//! flow properties, Manning uniform-flow discharge, and the hydraulic-jump
//! relations. Everything here is a pure function over SI quantities; the
//! callers are responsible for rejecting non-positive depth or width before
//! calling in (see `hf-analysis` for the validation layer).

pub mod flow;
pub mod geometry;
pub mod jump;
pub mod manning;

pub use flow::{critical_depth, froude_number, specific_energy, velocity};
pub use geometry::{area, hydraulic_radius, wetted_perimeter};
pub use jump::{energy_loss, sequent_depth};
pub use manning::manning_discharge;
