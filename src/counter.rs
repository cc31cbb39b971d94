//! Line counting for a single file.
//!
//! A missing file is an expected outcome and is only reported through the
//! log. Read and decode failures are returned to the caller, which treats
//! them as fatal.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;
use tracing::{error, info};

/// What a call to [`count_lines_in_file`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Test mode; the filesystem was not touched.
    Skipped,
    /// The path does not exist. Logged at ERROR, not an error.
    NotFound,
    /// The file was read and holds this many lines.
    Counted(usize),
}

#[derive(Debug, Error)]
pub enum CountError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid UTF-8", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
    #[error("failed to write line count")]
    Output(#[from] io::Error),
}

/// Count the lines of `filepath` and print ` <filepath> has <n> lines.` to `out`.
///
/// Lines are split the way [`str::lines`] splits them: `\n` or `\r\n`
/// terminate a line and a trailing unterminated fragment is a line of its
/// own, so `"x\ny\nz\n"` and `"x\ny\nz"` both hold three lines. The path is
/// shown lossily when it is not valid UTF-8.
pub fn count_lines_in_file<W: Write>(
    filepath: &Path,
    test_mode: bool,
    out: &mut W,
) -> Result<Outcome, CountError> {
    if test_mode {
        info!("Test mode: skipping actual file processing.");
        return Ok(Outcome::Skipped);
    }

    let shown = filepath.display();
    if !filepath.exists() {
        error!("File not found: {shown}");
        return Ok(Outcome::NotFound);
    }

    let line_count = read_text(filepath)?.lines().count();
    info!("Processed file: {shown}");
    info!("Total lines: {line_count}");
    writeln!(out, " {shown} has {line_count} lines.")?;

    Ok(Outcome::Counted(line_count))
}

fn read_text(filepath: &Path) -> Result<String, CountError> {
    let bytes = fs::read(filepath).map_err(|source| CountError::Read {
        path: filepath.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| CountError::Decode {
        path: filepath.to_path_buf(),
        source,
    })
}
