#![allow(dead_code)]

use std::path::PathBuf;

use planrec_core::{Operator, OperatorTable};
use tempfile::TempDir;

/// Helper function to create a temporary directory with a file in it
pub fn create_trace_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("failed_plans");
    std::fs::write(&path, contents).expect("Failed to write trace file");
    (temp_dir, path)
}

/// Gripper-style catalog with mixed costs
pub fn create_test_table() -> OperatorTable {
    OperatorTable::new(vec![
        Operator::new("pick ball1 rooma left", 1),
        Operator::new("move rooma roomb", 2),
        Operator::new("drop ball1 roomb left", 1),
    ])
}
