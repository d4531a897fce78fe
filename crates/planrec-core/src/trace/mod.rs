//! Failed-plans trace parsing.
//!
//! A trace file records earlier unsuccessful plan attempts:
//!
//! ```text
//! ; attempt from the previous run
//! (pick ball1 rooma left)
//! (move rooma roomb%%%)
//! =====
//! (pick ball2 rooma right)
//! ```
//!
//! - `=====` on its own line closes the current record.
//! - A line starting with `;` is a comment. A `;` anywhere else is an error.
//! - Every other line must be wrapped in `(` and `)`.
//! - A trailing `%%%` inside the parentheses marks the stage at which the
//!   attempt failed. Lines after it are validated but not recorded until the
//!   next separator.
//! - The file does not need to end with a separator; an empty file yields a
//!   single empty record.
//!
//! Parsing is strict: the first malformed line aborts with a
//! [`TraceFormatError`] and no partial store is returned.

mod parser;

#[cfg(test)]
mod tests;

use std::{fs, mem, path::Path};

use log::{debug, info};

pub use parser::{classify_line, LineError, RecordBuilder, TraceLine};

use crate::{
    error::TraceFormatError,
    models::{FailedPlanRecord, FailedPlanStore},
};

/// Line that ends one failed plan and starts the next.
pub const RECORD_SEPARATOR: &str = "=====";

/// Suffix marking the entry at which an attempt failed.
pub const FAILURE_MARKER: &str = "%%%";

/// First character of a full-line comment.
pub const COMMENT_PREFIX: char = ';';

/// Parses an in-memory failed-plans trace.
///
/// # Errors
///
/// Returns `TraceFormatError::MissingParenthesis` or
/// `TraceFormatError::MisplacedComment` for the first line violating the
/// format, with its 1-based line number.
pub fn parse_failed_plans(text: &str) -> Result<FailedPlanStore, TraceFormatError> {
    let mut records: Vec<FailedPlanRecord> = Vec::new();
    let mut current = RecordBuilder::new();

    // Split like a line reader would: a trailing newline ends the last line
    // rather than starting an empty one.
    for (index, line) in text.split_terminator('\n').enumerate() {
        let classified = classify_line(line).map_err(|err| err.at(index + 1, line))?;

        match classified {
            TraceLine::Separator => {
                let record = mem::take(&mut current).finish();
                debug!(
                    "Failed plan {} closed with {} step(s)",
                    records.len() + 1,
                    record.len()
                );
                records.push(record);
            }
            TraceLine::Comment => {}
            TraceLine::Entry { text, failing } => {
                if !current.push(text, failing) {
                    debug!("Discarding line {} after failing stage", index + 1);
                }
            }
        }
    }

    records.push(current.finish());
    Ok(FailedPlanStore::new(records))
}

/// Reads a whole failed-plans file and parses it.
///
/// # Errors
///
/// Returns `TraceFormatError::Open` if the file cannot be read, otherwise the
/// errors of [`parse_failed_plans`].
pub fn read_failed_plans(path: impl AsRef<Path>) -> Result<FailedPlanStore, TraceFormatError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| TraceFormatError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let store = parse_failed_plans(&String::from_utf8_lossy(&bytes))?;
    info!(
        "Parsed {} failed plan(s) from {}",
        store.len(),
        path.display()
    );
    Ok(store)
}
