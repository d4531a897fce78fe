//! Tests for the failed-plans trace parser.

use super::*;
use crate::error::TraceFormatError;

fn entries(record: &FailedPlanRecord) -> Vec<&str> {
    record.entries().iter().map(String::as_str).collect()
}

#[test]
fn test_empty_input_yields_one_empty_record() {
    let store = parse_failed_plans("").expect("empty trace is valid");
    assert_eq!(store.len(), 1);
    assert!(store[0].is_empty());
    assert_eq!(store[0].failing_index(), None);
}

#[test]
fn test_two_records_with_failing_stage() {
    let store = parse_failed_plans("(a)\n(b%%%)\n=====\n(c)\n").expect("valid trace");
    assert_eq!(store.len(), 2);
    assert_eq!(entries(&store[0]), vec!["a", "b"]);
    assert_eq!(store[0].failing_index(), Some(1));
    assert_eq!(entries(&store[1]), vec!["c"]);
    assert_eq!(store[1].failing_index(), None);
}

#[test]
fn test_comment_lines_are_dropped() {
    let store = parse_failed_plans("(a)\n;comment\n(b)\n").expect("valid trace");
    assert_eq!(store.len(), 1);
    assert_eq!(entries(&store[0]), vec!["a", "b"]);
}

#[test]
fn test_marker_inside_comment_is_ignored() {
    let store = parse_failed_plans("; (x%%%)\n(a)\n").expect("valid trace");
    assert_eq!(entries(&store[0]), vec!["a"]);
    assert_eq!(store[0].failing_index(), None);
}

#[test]
fn test_semicolon_not_first_is_rejected() {
    let err = parse_failed_plans("(a)\nfoo;bar\n").unwrap_err();
    match err {
        TraceFormatError::MisplacedComment { line, content } => {
            assert_eq!(line, 2);
            assert_eq!(content, "foo;bar");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_semicolon_inside_parentheses_is_rejected() {
    let err = parse_failed_plans("(a;b)\n").unwrap_err();
    assert!(matches!(err, TraceFormatError::MisplacedComment { line: 1, .. }));
}

#[test]
fn test_missing_leading_parenthesis_is_rejected() {
    let err = parse_failed_plans("a)\n").unwrap_err();
    assert!(matches!(
        err,
        TraceFormatError::MissingParenthesis { line: 1, .. }
    ));
    assert_eq!(err.line(), Some(1));
}

#[test]
fn test_missing_trailing_parenthesis_is_rejected() {
    let err = parse_failed_plans("(a)\n(b\n").unwrap_err();
    assert!(matches!(
        err,
        TraceFormatError::MissingParenthesis { line: 2, .. }
    ));
}

#[test]
fn test_blank_line_is_rejected() {
    let err = parse_failed_plans("(a)\n\n(b)\n").unwrap_err();
    assert!(matches!(
        err,
        TraceFormatError::MissingParenthesis { line: 2, .. }
    ));
}

#[test]
fn test_carriage_return_is_part_of_the_line() {
    let err = parse_failed_plans("(a)\r\n").unwrap_err();
    assert!(matches!(err, TraceFormatError::MissingParenthesis { .. }));
}

#[test]
fn test_empty_parentheses_yield_empty_entry() {
    let store = parse_failed_plans("()\n").expect("valid trace");
    assert_eq!(entries(&store[0]), vec![""]);
}

#[test]
fn test_consecutive_separators_yield_empty_records() {
    let store = parse_failed_plans("=====\n=====\n").expect("valid trace");
    assert_eq!(store.len(), 3);
    assert!(store.iter().all(FailedPlanRecord::is_empty));
}

#[test]
fn test_trailing_separator_leaves_empty_final_record() {
    let store = parse_failed_plans("(a)\n=====\n").expect("valid trace");
    assert_eq!(store.len(), 2);
    assert!(store[1].is_empty());
}

#[test]
fn test_missing_final_newline() {
    let store = parse_failed_plans("(a)\n(b%%%)").expect("valid trace");
    assert_eq!(entries(&store[0]), vec!["a", "b"]);
    assert_eq!(store[0].failing_index(), Some(1));
}

#[test]
fn test_lines_after_failing_stage_are_discarded() {
    let store =
        parse_failed_plans("(a%%%)\n(b)\n(c%%%)\n=====\n(d)\n").expect("valid trace");
    assert_eq!(entries(&store[0]), vec!["a"]);
    assert_eq!(store[0].failing_index(), Some(0));
    assert_eq!(entries(&store[1]), vec!["d"]);
}

#[test]
fn test_lines_after_failing_stage_are_still_validated() {
    let err = parse_failed_plans("(a%%%)\nbroken\n").unwrap_err();
    assert!(matches!(
        err,
        TraceFormatError::MissingParenthesis { line: 2, .. }
    ));
}

#[test]
fn test_short_entries_carry_no_marker() {
    assert_eq!(
        classify_line("(%%)"),
        Ok(TraceLine::Entry {
            text: "%%",
            failing: false
        })
    );
    assert_eq!(
        classify_line("(a)"),
        Ok(TraceLine::Entry {
            text: "a",
            failing: false
        })
    );
}

#[test]
fn test_bare_marker_is_empty_failing_entry() {
    assert_eq!(
        classify_line("(%%%)"),
        Ok(TraceLine::Entry {
            text: "",
            failing: true
        })
    );
}

#[test]
fn test_classify_line_shapes() {
    assert_eq!(classify_line("====="), Ok(TraceLine::Separator));
    assert_eq!(classify_line(";"), Ok(TraceLine::Comment));
    assert_eq!(classify_line("======"), Err(LineError::MissingParenthesis));
    assert_eq!(classify_line("("), Err(LineError::MissingParenthesis));
    assert_eq!(classify_line(")"), Err(LineError::MissingParenthesis));
    assert_eq!(classify_line(" (a)"), Err(LineError::MissingParenthesis));
    assert_eq!(classify_line("x ;"), Err(LineError::MisplacedComment));
}

#[test]
fn test_record_builder_states() {
    let mut builder = RecordBuilder::new();
    assert!(builder.push("a", false));
    assert!(!builder.is_draining());
    assert!(builder.push("b", true));
    assert!(builder.is_draining());
    assert!(!builder.push("c", false));
    assert!(!builder.push("d", true));

    let record = builder.finish();
    assert_eq!(entries(&record), vec!["a", "b"]);
    assert_eq!(record.failing_entry(), Some("b"));
}

#[test]
fn test_store_display_parses_back() {
    let text = "(a)\n(b%%%)\n=====\n=====\n(c)\n";
    let store = parse_failed_plans(text).expect("valid trace");
    assert_eq!(store.to_string(), text);
    assert_eq!(parse_failed_plans(&store.to_string()).expect("valid"), store);
}
