//! Line grammar and per-record state machine.

use crate::{error::TraceFormatError, models::FailedPlanRecord};

use super::{COMMENT_PREFIX, FAILURE_MARKER, RECORD_SEPARATOR};

/// Classification of a single valid trace line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceLine<'a> {
    /// The record separator `=====`
    Separator,
    /// A full-line comment
    Comment,
    /// A parenthesised entry with parentheses and marker removed
    Entry { text: &'a str, failing: bool },
}

/// Grammar violations of a single line, before line numbers are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    MissingParenthesis,
    MisplacedComment,
}

impl LineError {
    /// Attaches the 1-based line number and the offending text.
    pub fn at(self, line: usize, content: &str) -> TraceFormatError {
        let content = content.to_string();
        match self {
            LineError::MissingParenthesis => TraceFormatError::MissingParenthesis { line, content },
            LineError::MisplacedComment => TraceFormatError::MisplacedComment { line, content },
        }
    }
}

/// Classifies one line of a trace file.
///
/// The marker is only looked for after the parentheses are stripped, and an
/// entry shorter than the marker simply carries none.
pub fn classify_line(line: &str) -> Result<TraceLine<'_>, LineError> {
    if line == RECORD_SEPARATOR {
        return Ok(TraceLine::Separator);
    }

    match line.find(COMMENT_PREFIX) {
        Some(0) => return Ok(TraceLine::Comment),
        Some(_) => return Err(LineError::MisplacedComment),
        None => {}
    }

    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(LineError::MissingParenthesis)?;

    Ok(match inner.strip_suffix(FAILURE_MARKER) {
        Some(text) => TraceLine::Entry {
            text,
            failing: true,
        },
        None => TraceLine::Entry {
            text: inner,
            failing: false,
        },
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RecordState {
    /// Every entry is appended
    #[default]
    Collecting,
    /// The failing stage was seen; entries are dropped until the record ends
    Draining,
}

/// Accumulates the entries of one failed plan.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    entries: Vec<String>,
    state: RecordState,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers an entry to the record.
    ///
    /// Returns `false` when the entry was dropped because the failing stage
    /// has already been recorded.
    pub fn push(&mut self, text: &str, failing: bool) -> bool {
        match self.state {
            RecordState::Draining => false,
            RecordState::Collecting => {
                self.entries.push(text.to_string());
                if failing {
                    self.state = RecordState::Draining;
                }
                true
            }
        }
    }

    /// Whether the failing stage has been recorded.
    pub fn is_draining(&self) -> bool {
        self.state == RecordState::Draining
    }

    pub fn finish(self) -> FailedPlanRecord {
        match self.state {
            RecordState::Collecting => FailedPlanRecord::new(self.entries),
            RecordState::Draining => FailedPlanRecord::failed_at_last(self.entries),
        }
    }
}
