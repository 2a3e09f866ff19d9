//! hf-results: caller-side result handling.
//!
//! The analysis core hands back one immutable record per call; everything
//! here is what a host does with those records afterwards: keep a bounded
//! rolling history, assemble the JSON export document, and render the
//! plain-text report. Nothing in this crate feeds back into the core.

pub mod error;
pub mod export;
pub mod history;
pub mod report;

pub use error::{ResultsError, ResultsResult};
pub use export::{EXPORT_TITLE, EXPORT_VERSION, ExportDocument};
pub use history::{AnalysisHistory, DEFAULT_CAPACITY, HistoryEntry};
pub use report::render_report;
