//! Loading operator catalogs and plan listings from disk.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use planrec_core::{OperatorTable, Plan};

/// Reads a JSON operator catalog.
pub fn load_catalog(path: &Path) -> Result<OperatorTable> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))
}

/// Reads a plan listing and resolves its operator names against `table`.
pub fn load_plan(path: &Path, table: &OperatorTable) -> Result<Plan> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan {}", path.display()))?;
    table
        .resolve_plan(plan_names(&text))
        .with_context(|| format!("Invalid plan {}", path.display()))
}

/// Operator names of a plan listing, accepting saved plan files as input.
fn plan_names(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .map(|line| {
            line.strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'))
                .unwrap_or(line)
        })
}
