use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_matches::assert_matches;
use salestally::aggregate::{self, PipelineConfig};
use salestally::error::AggregateError;
use tempfile::TempDir;

fn write_record(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut f = File::create(&path).unwrap();
    write!(f, "{}", content).unwrap();
    path
}

#[test]
fn test_sum_example_totals() {
    let td = TempDir::new().unwrap();
    let files = vec![
        write_record(td.path(), "a.json", r#"{"total": 100}"#),
        write_record(td.path(), "b.json", r#"{"total": 250}"#),
        write_record(td.path(), "c.json", r#"{"total": 0}"#),
    ];

    let summary = aggregate::sum_sales(&files, &PipelineConfig::default()).unwrap();
    assert_eq!(summary.total, 350.0);
    assert_eq!(summary.count, 3);
}

#[test]
fn test_sum_is_order_independent() {
    let td = TempDir::new().unwrap();
    let mut files = vec![
        write_record(td.path(), "a.json", r#"{"total": 12.5}"#),
        write_record(td.path(), "b.json", r#"{"total": 7.5}"#),
        write_record(td.path(), "c.json", r#"{"total": 30}"#),
    ];

    let config = PipelineConfig::default();
    let forward = aggregate::sum_sales(&files, &config).unwrap();
    files.reverse();
    let backward = aggregate::sum_sales(&files, &config).unwrap();

    assert_eq!(forward, backward);
    assert_eq!(forward.total, 50.0);
}

#[test]
fn test_extra_fields_are_ignored() {
    let td = TempDir::new().unwrap();
    let files = vec![write_record(
        td.path(),
        "a.json",
        r#"{"store": "north", "total": 42, "items": [1, 2, 3]}"#,
    )];

    let summary = aggregate::sum_sales(&files, &PipelineConfig::default()).unwrap();
    assert_eq!(summary.total, 42.0);
    assert_eq!(summary.count, 1);
}

#[test]
fn test_field_name_is_configurable() {
    let td = TempDir::new().unwrap();
    let files = vec![write_record(
        td.path(),
        "a.json",
        r#"{"revenue": 99, "total": 1}"#,
    )];

    let config = PipelineConfig::new().with_total_field("revenue");
    let summary = aggregate::sum_sales(&files, &config).unwrap();
    assert_eq!(summary.total, 99.0);
}

#[test]
fn test_invalid_json_fails_whole_aggregation() {
    let td = TempDir::new().unwrap();
    let files = vec![
        write_record(td.path(), "a.json", r#"{"total": 100}"#),
        write_record(td.path(), "b.json", "{broken"),
    ];

    let result = aggregate::sum_sales(&files, &PipelineConfig::default());
    assert_matches!(result, Err(AggregateError::Parse { .. }));
}

#[test]
fn test_missing_field_fails() {
    let td = TempDir::new().unwrap();
    let files = vec![write_record(td.path(), "a.json", r#"{"revenue": 100}"#)];

    let result = aggregate::sum_sales(&files, &PipelineConfig::default());
    assert_matches!(result, Err(AggregateError::MissingField { field, .. }) => {
        assert_eq!(field, "total");
    });
}

#[test]
fn test_non_numeric_field_fails() {
    let td = TempDir::new().unwrap();
    let files = vec![write_record(td.path(), "a.json", r#"{"total": null}"#)];

    let result = aggregate::sum_sales(&files, &PipelineConfig::default());
    assert_matches!(result, Err(AggregateError::NotNumeric { .. }));
}

#[test]
fn test_non_object_record_fails() {
    let td = TempDir::new().unwrap();
    let files = vec![write_record(td.path(), "a.json", "[1, 2, 3]")];

    let result = aggregate::sum_sales(&files, &PipelineConfig::default());
    assert_matches!(result, Err(AggregateError::MissingField { .. }));
}

#[test]
fn test_missing_file_fails() {
    let td = TempDir::new().unwrap();
    let files = vec![td.path().join("absent.json")];

    let result = aggregate::sum_sales(&files, &PipelineConfig::default());
    assert_matches!(result, Err(AggregateError::Read { .. }));
}
