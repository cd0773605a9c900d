//! Student record model

use serde::{Deserialize, Serialize};

use super::{CompletedCourse, HistoryEntry};

/// Index values as published by the institution, kept verbatim.
///
/// These strings are shown next to the recomputed values for comparison.
/// They are never parsed back into computation inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedIndexes {
    /// Published cumulative index
    #[serde(default)]
    pub iaa: String,
    /// Published term index
    #[serde(default)]
    pub ia: String,
    /// Published approved-only index
    #[serde(default)]
    pub iap: String,
}

/// A student's academic record as assembled from the provider.
///
/// The completed-course baseline is fixed for the lifetime of a session.
/// Computations never mutate it; they work on fresh [`HistoryEntry`] copies
/// obtained from [`baseline_entries`](Self::baseline_entries).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Student display name
    pub name: String,

    /// Completed coursework, in transcript order
    pub completed: Vec<CompletedCourse>,

    /// Officially published indexes, when the provider reports them
    pub published: Option<PublishedIndexes>,
}

impl StudentRecord {
    /// Create a new student record
    #[must_use]
    pub const fn new(
        name: String,
        completed: Vec<CompletedCourse>,
        published: Option<PublishedIndexes>,
    ) -> Self {
        Self {
            name,
            completed,
            published,
        }
    }

    /// A fresh, independent copy of the baseline as history entries.
    ///
    /// Each what-if iteration starts from its own copy so hypothetical
    /// grades never accumulate across iterations.
    #[must_use]
    pub fn baseline_entries(&self) -> Vec<HistoryEntry> {
        self.completed.iter().map(HistoryEntry::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> StudentRecord {
        StudentRecord::new(
            "Ana Souza".to_string(),
            vec![CompletedCourse::new(60, 7.5), CompletedCourse::new(40, 8.0)],
            None,
        )
    }

    #[test]
    fn test_baseline_entries_preserve_order() {
        let record = sample_record();
        let entries = record.baseline_entries();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].hours, 60);
        assert_eq!(entries[1].hours, 40);
    }

    #[test]
    fn test_baseline_entries_are_independent_copies() {
        let record = sample_record();

        let mut first = record.baseline_entries();
        first.push(HistoryEntry::new(90, 10.0));

        // A later copy must not see the mutation of the first one
        let second = record.baseline_entries();
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_published_indexes_default_empty() {
        let published = PublishedIndexes::default();

        assert!(published.iaa.is_empty());
        assert!(published.ia.is_empty());
        assert!(published.iap.is_empty());
    }
}
