//! Level filter
//!
//! Matching is exact and case-sensitive. Normalizing the requested level
//! (e.g. upper-casing user input) is up to the caller.

use crate::types::LogRecord;

/// Selects records whose level equals a target string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelFilter {
    level: String,
}

impl LevelFilter {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
        }
    }

    /// The level this filter selects
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Check if a record should be kept
    pub fn matches(&self, record: &LogRecord) -> bool {
        !self.level.is_empty() && record.level() == self.level
    }

    /// Matching records, in their original relative order
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a LogRecord>
    where
        I: IntoIterator<Item = &'a LogRecord>,
    {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Records whose level is exactly `level`
///
/// An empty `level` or no matches gives an empty result.
pub fn filter_by_level<'a>(records: &'a [LogRecord], level: &str) -> Vec<&'a LogRecord> {
    LevelFilter::new(level).apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<LogRecord> {
        vec![
            LogRecord::new("d", "t1", "INFO", "one"),
            LogRecord::new("d", "t2", "ERROR", "two"),
            LogRecord::new("d", "t3", "INFO", "three"),
            LogRecord::new("d", "t4", "error", "four"),
            LogRecord::new("d", "t5", "ERROR", "five"),
        ]
    }

    #[test]
    fn test_filter_keeps_order() {
        let records = sample();
        let errors = filter_by_level(&records, "ERROR");
        let messages: Vec<&str> = errors.iter().map(|r| r.message()).collect();
        assert_eq!(messages, vec!["two", "five"]);
    }

    #[test]
    fn test_filter_partitions_collection() {
        let records = sample();
        let matched = filter_by_level(&records, "INFO");

        assert!(matched.iter().all(|r| r.level() == "INFO"));
        assert!(records
            .iter()
            .filter(|r| !matched.contains(r))
            .all(|r| r.level() != "INFO"));
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let records = sample();
        let lower = filter_by_level(&records, "error");
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].message(), "four");
        assert!(filter_by_level(&records, "Info").is_empty());
    }

    #[test]
    fn test_empty_target_and_empty_input() {
        let records = sample();
        assert!(filter_by_level(&records, "").is_empty());
        assert!(filter_by_level(&[], "ERROR").is_empty());
        assert!(filter_by_level(&records, "DEBUG").is_empty());
    }
}
