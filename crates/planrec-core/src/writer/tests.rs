//! Tests for the plan writer.

use std::fs;

use tempfile::TempDir;

use super::*;
use crate::models::{CostKind, Operator, OperatorId, OperatorTable};

/// Helper function to create a writer rooted in a temporary directory
fn create_test_writer(multi_file_mode: bool) -> (TempDir, PlanWriter) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut writer = PlanWriter::new();
    writer.configure(temp_dir.path().join("sas_plan"));
    writer.set_multi_file_mode(multi_file_mode);
    (temp_dir, writer)
}

fn create_test_table() -> OperatorTable {
    OperatorTable::new(vec![
        Operator::new("move a b", 1),
        Operator::new("move b c", 1),
    ])
}

#[test]
fn test_defaults() {
    let writer = PlanWriter::default();
    assert_eq!(writer.base_filename(), Path::new(DEFAULT_PLAN_FILENAME));
    assert_eq!(writer.plans_written(), 0);
    assert!(!writer.is_multi_file_mode());
    assert_eq!(writer.next_plan_path(), PathBuf::from("sas_plan"));
}

#[test]
fn test_single_file_mode_writes_base_name() {
    let (temp_dir, mut writer) = create_test_writer(false);
    let table = create_test_table();
    let plan = Plan::new(vec![OperatorId(0), OperatorId(1)]);

    let mut echo = Vec::new();
    let saved = writer
        .save_plan_to(&plan, &table, &mut echo)
        .expect("Failed to save plan");

    let path = temp_dir.path().join("sas_plan");
    assert_eq!(saved.path, path);
    assert_eq!(saved.number, 1);
    assert_eq!(saved.length, 2);
    assert_eq!(saved.cost.cost, 2);
    assert_eq!(saved.cost.kind, CostKind::UnitCost);
    assert_eq!(
        fs::read_to_string(&path).expect("plan file exists"),
        "(move a b)\n(move b c)\n; cost = 2 (unit cost)\n"
    );
    assert_eq!(
        String::from_utf8(echo).expect("utf8"),
        "move a b (1)\nmove b c (1)\n"
    );
    assert_eq!(writer.plans_written(), 1);
}

#[test]
fn test_multi_file_mode_numbers_files() {
    let (temp_dir, mut writer) = create_test_writer(true);
    let table = create_test_table();
    let plan = Plan::new(vec![OperatorId(1)]);

    let first = writer
        .save_plan_to(&plan, &table, &mut io::sink())
        .expect("Failed to save first plan");
    let second = writer
        .save_plan_to(&plan, &table, &mut io::sink())
        .expect("Failed to save second plan");

    assert_eq!(first.path, temp_dir.path().join("sas_plan.1"));
    assert_eq!(second.path, temp_dir.path().join("sas_plan.2"));
    for path in [&first.path, &second.path] {
        assert_eq!(
            fs::read_to_string(path).expect("plan file exists"),
            "(move b c)\n; cost = 1 (unit cost)\n"
        );
    }
    assert!(!temp_dir.path().join("sas_plan").exists());
    assert_eq!(writer.plans_written(), 2);
}

#[test]
fn test_previously_written_offsets_numbering() {
    let (temp_dir, mut writer) = create_test_writer(true);
    writer.set_previously_written(4);
    assert_eq!(writer.next_plan_path(), temp_dir.path().join("sas_plan.5"));

    let saved = writer
        .save_plan_to(&Plan::default(), &create_test_table(), &mut io::sink())
        .expect("Failed to save plan");
    assert_eq!(saved.number, 5);
    assert_eq!(
        fs::read_to_string(&saved.path).expect("plan file exists"),
        "; cost = 0 (unit cost)\n"
    );
    assert_eq!(writer.plans_written(), 5);
}

#[test]
fn test_existing_file_is_truncated() {
    let (temp_dir, mut writer) = create_test_writer(false);
    let path = temp_dir.path().join("sas_plan");
    fs::write(&path, "stale contents that are longer than the plan\n".repeat(8))
        .expect("Failed to seed file");

    let plan = Plan::new(vec![OperatorId(0)]);
    writer
        .save_plan_to(&plan, &create_test_table(), &mut io::sink())
        .expect("Failed to save plan");

    assert_eq!(
        fs::read_to_string(&path).expect("plan file exists"),
        "(move a b)\n; cost = 1 (unit cost)\n"
    );
}

#[test]
fn test_unwritable_path_is_output_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut writer = PlanWriter::new();
    writer.configure(temp_dir.path().join("missing-dir").join("sas_plan"));

    let err = writer
        .save_plan_to(&Plan::default(), &create_test_table(), &mut io::sink())
        .unwrap_err();

    match &err {
        PlanRecError::OutputIo { path, .. } => {
            assert_eq!(path, &temp_dir.path().join("missing-dir").join("sas_plan"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("Failed to open plan file: "));
    assert_eq!(err.exit_code(), crate::error::SEARCH_INPUT_ERROR);
    assert_eq!(writer.plans_written(), 0);
}

#[test]
#[should_panic(expected = "single plan file mode allows only one saved plan")]
fn test_second_save_in_single_file_mode_panics() {
    let (_temp_dir, mut writer) = create_test_writer(false);
    writer.set_previously_written(1);
    let _ = writer.save_plan_to(&Plan::default(), &create_test_table(), &mut io::sink());
}

#[test]
fn test_cost_line_holds_totals_beyond_u64() {
    let (_temp_dir, mut writer) = create_test_writer(false);
    let table = OperatorTable::new(vec![
        Operator::new("a", u64::MAX),
        Operator::new("b", 1),
    ]);
    let plan = Plan::new(vec![OperatorId(0), OperatorId(1)]);

    let saved = writer
        .save_plan_to(&plan, &table, &mut io::sink())
        .expect("Failed to save plan");

    assert_eq!(saved.cost.cost, u128::from(u64::MAX) + 1);
    assert_eq!(
        fs::read_to_string(&saved.path).expect("plan file exists"),
        "(a)\n(b)\n; cost = 18446744073709551616 (general cost)\n"
    );
}
