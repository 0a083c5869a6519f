//! Report output
//!
//! Writes the level summary (and the optional detail listing) either as the
//! plain-text table or as one JSON document.

use crate::config::OutputFormat;
use anyhow::Result;
use line_log_core::{format_level_counts, format_records, LevelCounts, LoadStats, LogRecord};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Everything a report needs, borrowed from the loaded logs
pub struct Report<'a> {
    pub file: &'a Path,
    pub counts: &'a LevelCounts,
    /// Level asked for, whether or not anything was loaded
    pub level: Option<&'a str>,
    /// Records carrying `level`; `None` when there is nothing to list
    pub records: Option<Vec<&'a LogRecord>>,
    pub stats: Option<LoadStats>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a Path,
    total: usize,
    counts: &'a LevelCounts,
    level: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<&'a [&'a LogRecord]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<JsonStats>,
}

#[derive(Serialize)]
struct JsonStats {
    lines_read: usize,
    records: usize,
    skipped: usize,
}

impl From<LoadStats> for JsonStats {
    fn from(stats: LoadStats) -> Self {
        Self {
            lines_read: stats.lines_read,
            records: stats.records,
            skipped: stats.skipped,
        }
    }
}

impl Report<'_> {
    pub fn write<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<()> {
        match format {
            OutputFormat::Txt => self.write_text(out),
            OutputFormat::Json => self.write_json(out),
        }
    }

    fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", format_level_counts(self.counts))?;

        if let (Some(level), Some(records)) = (self.level, &self.records) {
            writeln!(out, "\nLogs with level \"{}\":", level)?;
            if !records.is_empty() {
                writeln!(out, "{}", format_records(records.iter().copied()))?;
            }
        }

        if let Some(stats) = self.stats {
            writeln!(
                out,
                "\n{} lines read, {} records, {} malformed lines skipped",
                stats.lines_read, stats.records, stats.skipped
            )?;
        }

        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        let report = JsonReport {
            file: self.file,
            total: self.counts.total(),
            counts: self.counts,
            level: self.level,
            records: self.records.as_deref(),
            stats: self.stats.map(JsonStats::from),
        };

        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        Ok(())
    }
}
