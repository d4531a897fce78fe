//! Error types for the plan record library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Process exit status reserved for search input/output errors.
pub const SEARCH_INPUT_ERROR: i32 = 33;

/// Comprehensive error type for all plan record operations.
///
/// Every variant is fatal: callers are expected to stop rather than continue
/// with a half-written plan file or a partially parsed trace.
#[derive(Error, Debug)]
pub enum PlanRecError {
    /// The plan output file could not be opened or written
    #[error("Failed to open plan file: {}", path.display())]
    OutputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The failed-plans trace could not be read or is malformed
    #[error(transparent)]
    TraceFormat(#[from] TraceFormatError),
}

/// Violations of the failed-plans trace format.
#[derive(Error, Debug)]
pub enum TraceFormatError {
    /// The trace file could not be opened for reading
    #[error("Failed to open failed plans file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A non-comment line is not wrapped in parentheses
    #[error(
        "Failed to parse failed plan file, invalid format: missing '(' or ')' character \
         (line {line}: {content:?})"
    )]
    MissingParenthesis { line: usize, content: String },
    /// A ';' appears somewhere other than the first character of a line
    #[error(
        "Failed to parse failed plan file, invalid use of comments: character ';' not the \
         first in line (line {line}: {content:?})"
    )]
    MisplacedComment { line: usize, content: String },
}

impl PlanRecError {
    /// Creates an output error for the given plan file path.
    pub fn output_io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::OutputIo {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Exit status a front end should terminate with for this error.
    ///
    /// Both error families map to the same input/output status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::OutputIo { .. } | Self::TraceFormat(_) => SEARCH_INPUT_ERROR,
        }
    }
}

impl TraceFormatError {
    /// 1-based line number of the offending line, if the error came from one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Open { .. } => None,
            Self::MissingParenthesis { line, .. } | Self::MisplacedComment { line, .. } => {
                Some(*line)
            }
        }
    }
}

/// Result type alias for plan record operations
pub type Result<T> = std::result::Result<T, PlanRecError>;
