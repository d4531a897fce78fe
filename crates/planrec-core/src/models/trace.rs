//! Failed-plan trace models.
//!
//! A [`FailedPlanStore`] is built once by [`crate::trace`] and never mutated
//! afterwards, so it can be shared freely between readers.

use std::ops::Index;

use serde::Serialize;

/// One recorded unsuccessful plan attempt.
///
/// Entries are operator names in the order they were attempted. If the
/// attempt recorded where it failed, that entry is always the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FailedPlanRecord {
    entries: Vec<String>,
    failing_index: Option<usize>,
}

impl FailedPlanRecord {
    /// Builds a record with no failing stage.
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            entries,
            failing_index: None,
        }
    }

    /// Builds a record whose last entry is the failing stage.
    ///
    /// An empty `entries` vector yields a record without a failing stage.
    pub fn failed_at_last(entries: Vec<String>) -> Self {
        let failing_index = entries.len().checked_sub(1);
        Self {
            entries,
            failing_index,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Index of the entry that carried the failure marker, if any.
    pub fn failing_index(&self) -> Option<usize> {
        self.failing_index
    }

    pub fn failing_entry(&self) -> Option<&str> {
        self.failing_index.map(|i| self.entries[i].as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered collection of failed-plan records parsed from one trace file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FailedPlanStore {
    records: Vec<FailedPlanRecord>,
}

impl FailedPlanStore {
    pub(crate) fn new(records: Vec<FailedPlanRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[FailedPlanRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&FailedPlanRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FailedPlanRecord> {
        self.records.iter()
    }
}

impl Index<usize> for FailedPlanStore {
    type Output = FailedPlanRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a FailedPlanStore {
    type Item = &'a FailedPlanRecord;
    type IntoIter = std::slice::Iter<'a, FailedPlanRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
