//! Failed-plan trace formatting.
//!
//! [`FailedPlanRecord`] and [`FailedPlanStore`] display in the same trace
//! format the parser reads, so a store can be written back out and parsed
//! again. [`TraceSummary`] renders markdown for terminal output.

use std::fmt;

use crate::{
    models::{FailedPlanRecord, FailedPlanStore},
    trace::{FAILURE_MARKER, RECORD_SEPARATOR},
};

impl fmt::Display for FailedPlanRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.entries().iter().enumerate() {
            if self.failing_index() == Some(index) {
                writeln!(f, "({entry}{FAILURE_MARKER})")?;
            } else {
                writeln!(f, "({entry})")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for FailedPlanStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, record) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f, "{RECORD_SEPARATOR}")?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}

/// Markdown overview of a failed-plan store.
///
/// Entries are emitted as inline code so operator names containing markdown
/// markers (`*`, `_`, `#`, ...) are shown literally. A code span cannot hold a
/// backtick, so backticks inside entries are shown as `'`.
pub struct TraceSummary<'a>(pub &'a FailedPlanStore);

impl fmt::Display for TraceSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Failed plans ({})", self.0.len())?;

        for (number, record) in self.0.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "## Failed plan {}", number + 1)?;
            writeln!(f)?;

            if record.is_empty() {
                writeln!(f, "_No recorded steps._")?;
                continue;
            }

            for (index, entry) in record.entries().iter().enumerate() {
                write!(f, "{}. {}", index + 1, CodeSpan(entry))?;
                if record.failing_index() == Some(index) {
                    write!(f, " **(failing stage)**")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// An entry as a markdown inline code span.
struct CodeSpan<'a>(&'a str);

impl fmt::Display for CodeSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("_(empty)_");
        }
        write!(f, "`{}`", self.0.replace('`', "'"))
    }
}
