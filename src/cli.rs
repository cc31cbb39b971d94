//! Command line definition.
//!
//! Parsing produces an [`InvocationConfig`] that is never mutated afterwards.
//! The severity threshold is a closed [`LogLevel`] enum, so an out-of-range
//! `--log-level` is rejected by clap before a config value ever exists.
//!
//! Repeating an option keeps the last occurrence, and any unambiguous prefix
//! of a long option is accepted (`--log-l`, `--te`).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

/// Resolved command line inputs for a single run.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    version,
    about = "Count lines in a text file with optional test mode and logging.",
    args_override_self = true,
    infer_long_args = true
)]
pub struct InvocationConfig {
    /// Path to the .txt file to process.
    pub filepath: PathBuf,

    /// Run in test mode (does not read the file).
    #[arg(short = 't', long = "test")]
    pub test: bool,

    /// Set the logging level.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Warning)]
    pub log_level: LogLevel,

    /// If set, logs will be saved to 'logfile.log' instead of printed to console.
    #[arg(long = "log-to-file")]
    pub log_to_file: bool,
}

/// Minimum severity a record needs in order to be emitted.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "DEBUG")]
    Debug,
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
    #[value(name = "CRITICAL")]
    Critical,
}

impl LogLevel {
    /// Threshold as understood by the tracing subscriber.
    ///
    /// tracing has nothing above `ERROR`, and nothing in this program logs at
    /// critical severity, so `Critical` turns every record off.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Critical => LevelFilter::OFF,
        }
    }
}
