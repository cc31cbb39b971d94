//! Logging configuration and initialization.
//!
//! One tracing subscriber is installed for the life of the process. It writes
//! either to the console (stderr) or to `logfile.log` in the working
//! directory, filtered at the threshold chosen on the command line. Records
//! are rendered as `<timestamp> - <LEVEL> - <message>`.

use std::fmt;
use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriter};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::cli::{InvocationConfig, LogLevel};

/// Fixed name of the file sink, relative to the current directory.
pub const LOG_FILE_NAME: &str = "logfile.log";

/// Second precision, local time, no zone suffix.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders each event as a single `<timestamp> - <LEVEL> - <message>` line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFormat;

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let now = chrono::Local::now();
        write!(
            writer,
            "{} - {} - ",
            now.format(TIMESTAMP_FORMAT),
            level_name(*event.metadata().level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::WARN => "WARNING",
        other => other.as_str(),
    }
}

/// Build (without installing) a subscriber filtered at `level` and writing
/// through `make_writer`.
pub fn build_subscriber<W>(level: LogLevel, make_writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(level.level_filter())
        .with_ansi(false)
        .event_format(RecordFormat)
        .with_writer(make_writer)
        .finish()
}

/// Install the process-wide subscriber according to the parsed command line.
///
/// Fails if `logfile.log` cannot be opened, or if a global subscriber was
/// already installed.
pub fn configure_logging(config: &InvocationConfig) -> Result<()> {
    let writer = if config.log_to_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE_NAME)
            .with_context(|| format!("cannot open log file {LOG_FILE_NAME}"))?;
        BoxMakeWriter::new(Mutex::new(file))
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };

    tracing::subscriber::set_global_default(build_subscriber(config.log_level, writer))
        .context("logging was already initialized")
}
