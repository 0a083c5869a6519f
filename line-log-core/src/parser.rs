//! Line parser
//!
//! Turns one raw line of the form `<date> <time> <level> <message...>` into a
//! [`LogRecord`]. Fields are separated by runs of whitespace; the message is
//! whatever follows the third field with its inner whitespace left intact.

use crate::types::{LogError, LogRecord, Result};

/// Parse a single log line
///
/// Returns [`LogError::MalformedLine`] if the line splits into fewer than four
/// whitespace-delimited parts.
///
/// # Example
/// ```
/// use line_log_core::parse_line;
///
/// let record = parse_line("2024-01-01 10:00:00 ERROR disk  failure").unwrap();
/// assert_eq!(record.level(), "ERROR");
/// assert_eq!(record.message(), "disk  failure");
/// ```
pub fn parse_line(line: &str) -> Result<LogRecord> {
    let malformed = || LogError::MalformedLine {
        line: line.to_string(),
    };

    let (date, rest) = next_token(line).ok_or_else(malformed)?;
    let (time, rest) = next_token(rest).ok_or_else(malformed)?;
    let (level, rest) = next_token(rest).ok_or_else(malformed)?;

    // Whitespace-only remainder means there is no fourth part
    let message = rest.trim();
    if message.is_empty() {
        return Err(malformed());
    }

    Ok(LogRecord::new(date, time, level, message))
}

/// Split the leading token off `input`, skipping any whitespace before it
fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    Some(input.split_at(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_line() {
        let record = parse_line("2024-01-01 10:00:00 ERROR disk failure").unwrap();
        assert_eq!(record.date(), "2024-01-01");
        assert_eq!(record.time(), "10:00:00");
        assert_eq!(record.level(), "ERROR");
        assert_eq!(record.message(), "disk failure");
    }

    #[test]
    fn test_whitespace_runs_between_fields() {
        let record = parse_line("  2024-01-01\t\t10:00:00   WARN    low  memory  \n").unwrap();
        assert_eq!(record.date(), "2024-01-01");
        assert_eq!(record.time(), "10:00:00");
        assert_eq!(record.level(), "WARN");
        assert_eq!(record.message(), "low  memory");
    }

    #[test]
    fn test_inner_message_whitespace_preserved() {
        let record = parse_line("d t INFO a \t b   c").unwrap();
        assert_eq!(record.message(), "a \t b   c");
    }

    #[test]
    fn test_level_case_kept() {
        let record = parse_line("d t Info started").unwrap();
        assert_eq!(record.level(), "Info");
    }

    #[test]
    fn test_too_few_parts() {
        for line in ["", "   ", "2024-01-01", "2024-01-01 10:00:00", "2024-01-01 10:00:00 ERROR"] {
            let err = parse_line(line).unwrap_err();
            assert!(err.is_malformed_line(), "expected malformed for {:?}", line);
        }
    }

    #[test]
    fn test_trailing_whitespace_is_not_a_message() {
        assert!(parse_line("2024-01-01 10:00:00 ERROR    \t ").is_err());
    }
}
