//! Trial records and the append-only trial history.
//!
//! A [`TrialRecord`] is the immutable outcome of one coloring trial: which
//! colors landed where, and how many edges clashed. The snapshot is a value
//! copy — mutating the live graph after the trial never rewrites history.
//! [`TrialHistory`] only ever grows, in execution order.

use serde::{Deserialize, Serialize};

use dyecast_core::ColorAssignment;

/// Immutable outcome of a single coloring trial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// 1-based position of the trial in its run.
    pub trial: usize,
    /// Conflicting edges observed right after the coloring.
    pub conflicts: usize,
    /// Value copy of the coloring that produced `conflicts`.
    pub assignment: ColorAssignment,
}

impl TrialRecord {
    /// True iff the trial's coloring was conflict-free.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.conflicts == 0
    }
}

/// Append-only, execution-ordered log of trial outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialHistory {
    records: Vec<TrialRecord>,
}

impl TrialHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record. Records are never mutated or removed afterwards.
    pub fn push(&mut self, record: TrialRecord) {
        self.records.push(record);
    }

    /// Number of recorded trials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no trial has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index` (0-based), if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TrialRecord> {
        self.records.get(index)
    }

    /// Most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&TrialRecord> {
        self.records.last()
    }

    /// All records, in execution order.
    #[must_use]
    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    /// Number of conflict-free trials recorded so far.
    #[must_use]
    pub fn successes(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }

    /// Iterate records in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, TrialRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a TrialHistory {
    type Item = &'a TrialRecord;
    type IntoIter = std::slice::Iter<'a, TrialRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
