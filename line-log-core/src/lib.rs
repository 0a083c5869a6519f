//! Line Log Core Library
//!
//! A small, stateless library for reading plain-text log files of the form
//! `<date> <time> <level> <message...>` and summarizing them by level.
//!
//! # Architecture
//!
//! The pipeline is a straight batch run:
//! - [`parser`] turns one line into a [`LogRecord`] or rejects it
//! - [`loader`] reads a file line by line and keeps the accepted records
//! - [`stats`] counts records per level
//! - [`filter`] selects the records of a single level
//! - [`report`] renders the counts as a table and records as lines
//!
//! The library does NOT:
//! - Detect log formats or normalize timestamps
//! - Reassemble multi-line messages
//! - Parse command lines or read configuration files
//!
//! All of that lives in the application layer (line-log-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use line_log_core::{count_by_level, filter_by_level, format_level_counts, format_records, load_logs};
//! use std::path::Path;
//!
//! // A missing file prints a diagnostic and loads as empty
//! let logs = load_logs(Path::new("app.log"));
//!
//! let counts = count_by_level(&logs);
//! println!("{}", format_level_counts(&counts));
//!
//! let errors = filter_by_level(&logs, "ERROR");
//! println!("{}", format_records(errors));
//! ```

// Public modules
pub mod filter;
pub mod loader;
pub mod parser;
pub mod report;
pub mod stats;
pub mod types;

// Re-export main types for convenience
pub use filter::{filter_by_level, LevelFilter};
pub use loader::{
    load_logs, load_logs_with_diagnostics, try_load_logs, LoadStats, LoadedLogs, LogRecords,
};
pub use parser::parse_line;
pub use report::{format_level_counts, format_records, render_record, NO_ENTRIES_MESSAGE};
pub use stats::{count_by_level, LevelCounts};
pub use types::{LogCollection, LogError, LogRecord, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
