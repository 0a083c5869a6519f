//! Line Log Reader CLI Application
//!
//! This is the command-line interface for the line log reader.
//! It uses the line-log-core library and adds:
//! - Argument handling and an optional TOML config file
//! - Level normalization for the detail filter
//! - Text and JSON report output

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

mod config;
mod report;

use config::{AppConfig, OutputFormat};
use line_log_core::{count_by_level, filter_by_level, load_logs_with_diagnostics};
use report::Report;

/// Line Log Reader - Summarize plain-text log files by level
#[derive(Parser, Debug, Default)]
#[command(name = "line-log-cli")]
#[command(about = "Count log entries per level and list the entries of one level", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the log file to read
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Level to list in detail (case-insensitive, e.g. error)
    #[arg(value_name = "LEVEL")]
    level: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print how many lines were read and skipped
    #[arg(long)]
    stats: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Effective settings after merging the config file and the command line
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    file: Option<PathBuf>,
    level: Option<String>,
    format: OutputFormat,
    show_stats: bool,
}

impl Settings {
    fn resolve(args: &Args, config: AppConfig) -> Self {
        let level = args
            .level
            .clone()
            .or(config.filter.level)
            .map(|level| level.trim().to_uppercase())
            .filter(|level| !level.is_empty());

        Self {
            file: args.file.clone().or(config.input.file),
            level,
            format: args.format.unwrap_or(config.output.format),
            show_stats: args.stats || config.output.show_stats,
        }
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Line Log Reader CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using core library v{}", line_log_core::VERSION);

    let config = match &args.config {
        Some(config_path) => {
            log::info!("Loading configuration from: {:?}", config_path);
            let config = config::load_config(config_path)?;
            log::debug!("Configuration loaded successfully");
            config
        }
        None => AppConfig::default(),
    };

    let settings = Settings::resolve(&args, config);
    log::debug!("Effective settings: {:?}", settings);

    let stdout = io::stdout();
    run(&settings, &mut stdout.lock(), &mut io::stderr())
}

/// Load, count, and print; a missing input is reported, not raised
fn run<W: Write, E: Write>(settings: &Settings, out: &mut W, diagnostics: &mut E) -> Result<()> {
    let Some(path) = &settings.file else {
        writeln!(out, "Error: No input path to logfile.")?;
        return Ok(());
    };

    let loaded = load_logs_with_diagnostics(path, diagnostics);
    let counts = count_by_level(loaded.records());

    let level = settings.level.as_deref();

    // Nothing to list when nothing was loaded
    let records = match level {
        Some(level) if !loaded.is_empty() => {
            let matching = filter_by_level(loaded.records(), level);
            log::debug!("{} records with level {}", matching.len(), level);
            Some(matching)
        }
        _ => None,
    };

    let report = Report {
        file: path,
        counts: &counts,
        level,
        records,
        stats: settings.show_stats.then_some(loaded.stats),
    };
    report.write(settings.format, out)?;
    out.flush()?;

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::{Builder, Target};
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    // Report output owns stdout
    Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
