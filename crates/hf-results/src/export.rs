//! JSON export document assembly.

use crate::error::ResultsResult;
use crate::history::{AnalysisHistory, HistoryEntry};
use chrono::Utc;
use hf_analysis::ChannelInputs;
use serde::{Deserialize, Serialize};

/// Title written into every export.
pub const EXPORT_TITLE: &str = "HydroFlow Analysis Results";

/// Export format version.
pub const EXPORT_VERSION: &str = "2.0";

/// The export shape: current inputs plus the rolling history.
///
/// This only defines the document; where it goes (file, clipboard, HTTP
/// response) is the caller's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub title: String,
    /// ISO-8601 creation time
    pub timestamp: String,
    pub version: String,
    pub inputs: ChannelInputs,
    /// History entries, newest first
    pub history: Vec<HistoryEntry>,
}

impl ExportDocument {
    /// Assemble a document stamped with the current UTC time.
    pub fn new(inputs: ChannelInputs, history: &AnalysisHistory) -> Self {
        Self::with_timestamp(inputs, history, Utc::now().to_rfc3339())
    }

    pub fn with_timestamp(
        inputs: ChannelInputs,
        history: &AnalysisHistory,
        timestamp: String,
    ) -> Self {
        Self {
            title: EXPORT_TITLE.to_string(),
            timestamp,
            version: EXPORT_VERSION.to_string(),
            inputs,
            history: history.entries().cloned().collect(),
        }
    }

    pub fn to_json_pretty(&self) -> ResultsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use hf_analysis::{AnalysisConfig, analyze};

    #[test]
    fn document_shape_round_trips() {
        let inputs = ChannelInputs::new(2.0, 1.5, 0.001, 0.025, 0.2);
        let result = analyze(&inputs, &AnalysisConfig::default()).unwrap();

        let mut history = AnalysisHistory::new();
        history.push(HistoryEntry::with_timestamp(&result, "12:00:00".to_string()));

        let doc = ExportDocument::with_timestamp(
            inputs,
            &history,
            "2024-01-01T00:00:00+00:00".to_string(),
        );
        let json = doc.to_json_pretty().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "HydroFlow Analysis Results");
        assert_eq!(value["version"], "2.0");
        assert_eq!(value["timestamp"], "2024-01-01T00:00:00+00:00");
        assert_eq!(value["inputs"]["q"], 2.0);
        assert_eq!(value["history"].as_array().unwrap().len(), 1);

        let parsed: ExportDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.history.len(), 1);
        assert_eq!(parsed.history[0].timestamp, "12:00:00");
    }
}
