//! Count the lines of a UTF-8 text file.
//!
//! High-level flow:
//! 1. Parse the command line. Bad arguments (including an unknown
//!    `--log-level`) print usage to stderr and exit 2 before anything else runs.
//! 2. Install the tracing subscriber: console (stderr) or `logfile.log`,
//!    filtered at the requested threshold.
//! 3. Count lines and print ` <filepath> has <n> lines.` to stdout, unless
//!    test mode is on or the file does not exist.
//!
//! A missing file exits 0 after an ERROR record. Read and decode failures
//! exit non-zero via anyhow.

mod cli;
mod counter;
mod logging;

use std::io;

use anyhow::Result;
use clap::Parser;

use cli::InvocationConfig;
use counter::count_lines_in_file;
use logging::configure_logging;

fn main() -> Result<()> {
    let config = InvocationConfig::parse();
    configure_logging(&config)?;

    let mut stdout = io::stdout().lock();
    count_lines_in_file(&config.filepath, config.test, &mut stdout)?;

    Ok(())
}
