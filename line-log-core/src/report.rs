//! Text rendering of counts and records
//!
//! - Summary table: one row per level, sorted by level name, columns padded
//!   so nothing is truncated.
//! - Detail listing: one `date time level - message` line per record.
//!
//! Both return a `String` without a trailing newline.

use crate::stats::LevelCounts;
use crate::types::LogRecord;

/// Returned by [`format_level_counts`] when there is nothing to count
pub const NO_ENTRIES_MESSAGE: &str = "No log entries found.";

const LEVEL_HEADER: &str = "Log Level";
const COUNT_HEADER: &str = "Count";
const COLUMN_SEPARATOR: &str = " | ";

/// Render level counts as an aligned table
///
/// ```text
/// Log Level | Count
/// -----------------
/// ERROR     | 2
/// INFO      | 5
/// ```
pub fn format_level_counts(counts: &LevelCounts) -> String {
    if counts.is_empty() {
        return NO_ENTRIES_MESSAGE.to_string();
    }

    let rows: Vec<(&str, String)> = counts
        .sorted()
        .into_iter()
        .map(|(level, count)| (level, count.to_string()))
        .collect();

    let level_width = rows
        .iter()
        .map(|(level, _)| level.chars().count())
        .fold(LEVEL_HEADER.len(), usize::max);
    let count_width = rows
        .iter()
        .map(|(_, count)| count.len())
        .fold(COUNT_HEADER.len(), usize::max);

    let header = format_row(LEVEL_HEADER, COUNT_HEADER, level_width, count_width);
    let separator = "-".repeat(header.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header);
    lines.push(separator);
    lines.extend(
        rows.iter()
            .map(|(level, count)| format_row(level, count, level_width, count_width)),
    );

    lines.join("\n")
}

fn format_row(level: &str, count: &str, level_width: usize, count_width: usize) -> String {
    format!(
        "{:<level_width$}{}{:<count_width$}",
        level, COLUMN_SEPARATOR, count
    )
}

/// Render one record as `date time level - message`
pub fn render_record(record: &LogRecord) -> String {
    record.to_string()
}

/// Render records one per line, in the given order
pub fn format_records<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    records
        .into_iter()
        .map(render_record)
        .collect::<Vec<_>>()
        .join("\n")
}
