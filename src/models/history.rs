//! Prediction history model
//!
//! This module contains the immutable `HistoryEntry` record produced by each
//! submission and the session-scoped `PredictionHistory` log that owns all
//! entries. The log is append-only with no deduplication and no size cap;
//! truncation to the most recent entries happens only at display time.

use chrono::{DateTime, Utc};

use crate::algorithm::glucose::{GlucoseAnalysis, analyze_glucose, glucose_band};
use crate::inference::PredictionResult;
use crate::models::patient::PatientInput;
use crate::models::types::GlucoseBand;

/// Maximum number of entries shown in the history display
pub const DISPLAY_LIMIT: usize = 5;

/// Immutable record of one prediction
///
/// Combines the input snapshot, the verified result, the 2-hour glucose
/// band derived at creation time, and a creation timestamp. Entries are
/// created exactly once per submission and never mutated; the history store
/// exclusively owns them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryEntry {
    /// Snapshot of the submitted measurements
    pub input: PatientInput,
    /// Verified classification outcome
    pub result: PredictionResult,
    /// 2-hour glucose band at submission time
    pub glucose_band: GlucoseBand,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry for a submitted input and its result
    ///
    /// The glucose band is derived here from the input snapshot so entry
    /// and snapshot can never disagree.
    #[must_use]
    pub fn new(input: PatientInput, result: PredictionResult) -> Self {
        Self {
            input,
            result,
            glucose_band: glucose_band(f64::from(input.glucose)),
            created_at: Utc::now(),
        }
    }

    /// Glucose value of the underlying snapshot, mg/dL
    #[must_use]
    pub const fn glucose(&self) -> u16 {
        self.input.glucose
    }

    /// Category label shown in the history display
    #[must_use]
    pub const fn category_label(&self) -> &'static str {
        self.glucose_band.label()
    }

    /// Five-band fasting/2-hour analysis recomputed from the snapshot
    ///
    /// Derived, not stored: the five-band category is a pure function of
    /// the glucose value and stays available without widening the record.
    #[must_use]
    pub fn analysis(&self) -> GlucoseAnalysis {
        analyze_glucose(f64::from(self.input.glucose))
    }

    /// Timestamp formatted the way the history display shows it
    #[must_use]
    pub fn timestamp_display(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Append-only, session-scoped log of past predictions
#[derive(Debug, Default)]
pub struct PredictionHistory {
    entries: Vec<HistoryEntry>,
}

impl PredictionHistory {
    /// Create a new empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry to the end of the log
    ///
    /// Never fails; nothing is deduplicated and the underlying sequence is
    /// not capped.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// At most the last `n` entries, most recent first
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// The most recently appended entry, if any
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Remove every entry unconditionally
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries in the log
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries, oldest first
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a PredictionHistory {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
