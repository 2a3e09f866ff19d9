//! Bounded history of recent analyses.

use chrono::Local;
use hf_analysis::{AnalysisResult, ChannelInputs, Regime};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of analyses retained by default.
pub const DEFAULT_CAPACITY: usize = 20;

/// One remembered analysis: the inputs plus the headline outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub inputs: ChannelInputs,
    pub normal_depth_m: f64,
    pub critical_depth_m: f64,
    pub froude_normal: f64,
    pub regime: Regime,
}

impl HistoryEntry {
    /// Snapshot a result, stamped with the current local time.
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self::with_timestamp(result, Local::now().format("%H:%M:%S").to_string())
    }

    pub fn with_timestamp(result: &AnalysisResult, timestamp: String) -> Self {
        Self {
            timestamp,
            inputs: result.inputs,
            normal_depth_m: result.normal.depth_m,
            critical_depth_m: result.critical.depth_m,
            froude_normal: result.normal.froude,
            regime: result.regime,
        }
    }
}

/// Caller-owned rolling buffer of recent analyses, newest first.
///
/// The analysis core never touches this; hosts that share one buffer
/// across threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct AnalysisHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert at the front, evicting the oldest entries beyond capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    /// Snapshot a result and insert it.
    pub fn record(&mut self, result: &AnalysisResult) {
        self.push(HistoryEntry::from_result(result));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }
}

impl Default for AnalysisHistory {
    fn default() -> Self {
        Self::new()
    }
}
