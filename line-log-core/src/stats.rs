//! Per-level occurrence counts
//!
//! [`LevelCounts`] is keyed by the exact `level` strings seen in the records.
//! The backing map is unordered; anything that needs a stable order must go
//! through [`LevelCounts::sorted`].

use crate::types::LogRecord;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Mapping from level to the number of records carrying it
///
/// Only levels that were actually observed have an entry, so every count is
/// at least one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCounts {
    counts: HashMap<String, usize>,
}

impl LevelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more record
    pub fn add(&mut self, record: &LogRecord) {
        *self.counts.entry(record.level().to_string()).or_insert(0) += 1;
    }

    /// Count for `level`, `None` if it was never seen
    pub fn get(&self, level: &str) -> Option<usize> {
        self.counts.get(level).copied()
    }

    /// Number of distinct levels
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the number of records counted
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(level, count)| (level.as_str(), *count))
    }

    /// Entries ordered lexicographically by level
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<'a> Extend<&'a LogRecord> for LevelCounts {
    fn extend<I: IntoIterator<Item = &'a LogRecord>>(&mut self, records: I) {
        for record in records {
            self.add(record);
        }
    }
}

impl<'a> FromIterator<&'a LogRecord> for LevelCounts {
    fn from_iter<I: IntoIterator<Item = &'a LogRecord>>(records: I) -> Self {
        let mut counts = Self::new();
        counts.extend(records);
        counts
    }
}

impl Serialize for LevelCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Sorted so serialized output is stable across runs
        let ordered: BTreeMap<&str, usize> = self.iter().collect();
        ordered.serialize(serializer)
    }
}

/// Tally the records by level
pub fn count_by_level<'a, I>(records: I) -> LevelCounts
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    records.into_iter().collect()
}
