//! Log loader
//!
//! Reads a line-oriented source, runs the line parser over every line and
//! keeps the accepted records in source order. Malformed lines are skipped and
//! counted; they never stop the load.
//!
//! Two ways in:
//! - [`LogRecords`] is a lazy, single-pass iterator over any [`BufRead`].
//!   Re-reading means building a new one.
//! - [`load_logs`] and friends drain a file into an owned [`LogCollection`].
//!   [`load_logs`] never fails: an unreadable source becomes a diagnostic plus
//!   an empty collection, the same thing an empty file produces.

use crate::parser::parse_line;
use crate::types::{LogCollection, LogError, LogRecord, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines, Write};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

/// Counters collected while reading a source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read from the source, malformed ones included
    pub lines_read: usize,
    /// Lines that produced a record
    pub records: usize,
    /// Lines dropped as malformed
    pub skipped: usize,
}

/// Records loaded from a file together with the loader counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedLogs {
    pub records: LogCollection,
    pub stats: LoadStats,
}

impl LoadedLogs {
    /// Accepted records, in file order
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Drop the counters and keep the records
    pub fn into_records(self) -> LogCollection {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Lazy iterator over the records of a line-oriented source
///
/// Yields `Ok` for every accepted line. Malformed lines are skipped
/// internally and show up only in [`LogRecords::stats`]. An I/O error is
/// yielded once as [`LogError::SourceUnavailable`], after which the iterator
/// is exhausted.
pub struct LogRecords<R> {
    lines: Lines<R>,
    source: PathBuf,
    stats: LoadStats,
    finished: bool,
}

impl LogRecords<BufReader<File>> {
    /// Open a file for record-by-record reading
    pub fn open(path: &Path) -> Result<Self> {
        log::debug!("Opening log file: {:?}", path);

        let file = File::open(path).map_err(|source| LogError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::with_source(BufReader::new(file), path))
    }
}

impl<R: BufRead> LogRecords<R> {
    /// Read records from an arbitrary buffered reader
    pub fn new(reader: R) -> Self {
        Self::with_source(reader, Path::new("<stream>"))
    }

    /// Read records from a reader, naming `source` in errors and logs
    pub fn with_source(reader: R, source: &Path) -> Self {
        Self {
            lines: reader.lines(),
            source: source.to_path_buf(),
            stats: LoadStats::default(),
            finished: false,
        }
    }

    /// Counters for the lines consumed so far
    pub fn stats(&self) -> LoadStats {
        self.stats
    }
}

impl<R: BufRead> Iterator for LogRecords<R> {
    type Item = Result<LogRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(source)) => {
                    self.finished = true;
                    return Some(Err(LogError::SourceUnavailable {
                        path: self.source.clone(),
                        source,
                    }));
                }
                None => {
                    self.finished = true;
                    return None;
                }
            };

            self.stats.lines_read += 1;

            match parse_line(&line) {
                Ok(record) => {
                    self.stats.records += 1;
                    return Some(Ok(record));
                }
                Err(e) => {
                    self.stats.skipped += 1;
                    log::debug!(
                        "Skipping line {} of {:?}: {}",
                        self.stats.lines_read,
                        self.source,
                        e
                    );
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for LogRecords<R> {}

/// Load every record of a file, failing on any access error
///
/// The file is read to the end before anything is returned; a read error
/// halfway through discards what was read so far.
pub fn try_load_logs(path: &Path) -> Result<LoadedLogs> {
    log::info!("Loading log file: {:?}", path);

    let mut reader = LogRecords::open(path)?;
    let records = reader.by_ref().collect::<Result<LogCollection>>()?;
    let stats = reader.stats();

    log::info!(
        "Loaded {} records from {:?} ({} of {} lines skipped)",
        stats.records,
        path,
        stats.skipped,
        stats.lines_read
    );

    Ok(LoadedLogs { records, stats })
}

/// Load a file, writing a diagnostic to `sink` if it cannot be read
///
/// Access failures are not propagated: the diagnostic goes to `sink` and an
/// empty result comes back.
pub fn load_logs_with_diagnostics<W: Write + ?Sized>(path: &Path, sink: &mut W) -> LoadedLogs {
    match try_load_logs(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::debug!("{}", e);
            // Nowhere left to report a failing diagnostic sink
            let _ = writeln!(sink, "{}", e.diagnostic());
            LoadedLogs::default()
        }
    }
}

/// Load a file into a collection, reporting access failures on stderr
///
/// A missing or unreadable file yields an empty collection, exactly like an
/// empty file.
pub fn load_logs(path: &Path) -> LogCollection {
    load_logs_with_diagnostics(path, &mut io::stderr()).into_records()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use tempfile::NamedTempFile;

    fn write_log(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    /// Reader that hands out some bytes and then fails
    struct FailingReader {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::Other, "device lost")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_skips_malformed_lines() {
        let file = write_log(
            "2024-01-01 10:00:00 INFO started\n\
             garbage\n\
             2024-01-01 10:00:01 ERROR disk failure\n\
             2024-01-01 10:00:02\n\
             2024-01-01 10:00:03 WARN low memory\n",
        );

        let loaded = try_load_logs(file.path()).unwrap();
        let levels: Vec<&str> = loaded.records().iter().map(|r| r.level()).collect();
        assert_eq!(levels, vec!["INFO", "ERROR", "WARN"]);
        assert_eq!(
            loaded.stats,
            LoadStats {
                lines_read: 5,
                records: 3,
                skipped: 2
            }
        );
    }

    #[test]
    fn test_no_trailing_newline_and_crlf() {
        let file = write_log("d1 t1 INFO one\r\nd2 t2 INFO two");
        let records = load_logs(file.path());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message(), "one");
        assert_eq!(records[1].message(), "two");
    }

    #[test]
    fn test_missing_file_reports_and_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.log");

        let mut diagnostics = Vec::new();
        let loaded = load_logs_with_diagnostics(&path, &mut diagnostics);

        assert!(loaded.is_empty());
        assert_eq!(loaded.stats, LoadStats::default());
        assert_eq!(
            String::from_utf8(diagnostics).unwrap(),
            format!("Error: File '{}' not found.\n", path.display())
        );
    }

    #[test]
    fn test_missing_file_is_an_error_for_try_load() {
        let dir = tempfile::tempdir().unwrap();
        let err = try_load_logs(&dir.path().join("nope.log")).unwrap_err();
        assert!(matches!(err, LogError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_directory_gives_generic_diagnostic() {
        let dir = tempfile::tempdir().unwrap();

        let mut diagnostics = Vec::new();
        let loaded = load_logs_with_diagnostics(dir.path(), &mut diagnostics);

        assert!(loaded.is_empty());
        let text = String::from_utf8(diagnostics).unwrap();
        assert!(text.starts_with("An error occurred: "), "got {:?}", text);
    }

    #[test]
    fn test_invalid_utf8_is_an_access_failure() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"d t INFO ok\nd t INFO \xff\xfe\n").unwrap();
        file.flush().unwrap();

        let mut diagnostics = Vec::new();
        let loaded = load_logs_with_diagnostics(file.path(), &mut diagnostics);
        assert!(loaded.is_empty());
        assert!(!diagnostics.is_empty());
    }

    #[test]
    fn test_empty_file() {
        let file = write_log("");
        let mut diagnostics = Vec::new();
        let loaded = load_logs_with_diagnostics(file.path(), &mut diagnostics);
        assert!(loaded.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_streaming_is_lazy_and_single_pass() {
        let input = "a b INFO one\nbad line\na b WARN two\n";
        let mut records = LogRecords::new(Cursor::new(input));

        let first = records.next().unwrap().unwrap();
        assert_eq!(first.message(), "one");
        assert_eq!(records.stats().lines_read, 1);

        let second = records.next().unwrap().unwrap();
        assert_eq!(second.level(), "WARN");
        assert_eq!(records.stats().skipped, 1);

        assert!(records.next().is_none());
        assert!(records.next().is_none());
    }

    #[test]
    fn test_streaming_io_error_ends_iteration() {
        let reader = BufReader::new(FailingReader {
            data: Cursor::new(b"a b INFO one\n".to_vec()),
        });
        let mut records = LogRecords::new(reader);

        assert!(records.next().unwrap().is_ok());
        let err = records.next().unwrap().unwrap_err();
        assert_eq!(err.diagnostic(), "An error occurred: device lost");
        assert!(records.next().is_none());
    }
}
