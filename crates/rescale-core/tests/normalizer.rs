//! Integration tests for the two-pass normalization pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use rescale_core::config::{ConstantColumnMode, NormalizerConfig};
use rescale_core::error::NormalizeError;
use rescale_core::normalizer::{collect_stats, normalize_file};

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write input");
    path
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read output")
        .lines()
        .map(String::from)
        .collect()
}

fn parse_row(line: &str, delimiter: char) -> Vec<f64> {
    line.split(delimiter)
        .map(|cell| cell.parse::<f64>().expect("numeric cell"))
        .collect()
}

fn assert_row_eq(line: &str, expected: &[f64]) {
    let actual = parse_row(line, ';');
    assert_eq!(actual.len(), expected.len(), "row width: {line}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-12, "expected {e}, got {a} in {line}");
    }
}

#[test]
fn normalizes_reference_scenario() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "wine.csv", "a;b;quality\n1;10;5\n3;20;6\n5;30;7\n");
    let output = dir.path().join("wine-normalized.csv");

    let config = NormalizerConfig::new(&input, &output);
    let report = normalize_file(&config).expect("normalize");

    assert_eq!(report.rows, 3);
    assert_eq!(report.excluded_column, "quality");

    let lines = read_lines(&output);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "a;b;quality");
    assert_row_eq(&lines[1], &[1.0, 10.0, 5.0]);
    assert_row_eq(&lines[2], &[5.0, 30.0, 7.0]);
    assert_row_eq(&lines[3], &[0.0, 0.0, 5.0]);
    assert_row_eq(&lines[4], &[0.5, 0.5, 6.0]);
    assert_row_eq(&lines[5], &[1.0, 1.0, 7.0]);
}

#[test]
fn excluded_column_passes_through_verbatim() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "x;quality\n1;5.25\n2;6.50\n");
    let output = dir.path().join("out.csv");

    normalize_file(&NormalizerConfig::new(&input, &output)).expect("normalize");

    let lines = read_lines(&output);
    let labels: Vec<&str> = lines[3..]
        .iter()
        .map(|line| line.rsplit(';').next().unwrap())
        .collect();
    assert_eq!(labels, ["5.25", "6.50"]);
}

#[test]
fn preserves_row_and_column_counts() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "in.csv",
        "a;b;quality\n1;2;3\n4;5;6\n7;8;9\n10;11;12\n",
    );
    let output = dir.path().join("out.csv");

    let report = normalize_file(&NormalizerConfig::new(&input, &output)).expect("normalize");
    assert_eq!(report.rows, 4);

    let lines = read_lines(&output);
    // header + min + max + data rows
    assert_eq!(lines.len(), 3 + 4);
    for line in &lines {
        assert_eq!(line.split(';').count(), 3);
    }
}

#[test]
fn round_trip_recovers_raw_values() {
    let dir = TempDir::new().unwrap();
    let raw = [
        [7.0, 0.27, 6.0],
        [6.3, 0.30, 6.0],
        [8.1, 0.28, 6.0],
        [7.2, 0.23, 6.0],
    ];
    let mut contents = String::from("acidity;sulphates;quality\n");
    for row in &raw {
        contents.push_str(&format!("{};{};{}\n", row[0], row[1], row[2]));
    }
    let input = write_input(&dir, "in.csv", &contents);
    let output = dir.path().join("out.csv");

    normalize_file(&NormalizerConfig::new(&input, &output)).expect("normalize");

    let lines = read_lines(&output);
    let min = parse_row(&lines[1], ';');
    let max = parse_row(&lines[2], ';');
    for (row_idx, line) in lines[3..].iter().enumerate() {
        let normalized = parse_row(line, ';');
        for col in 0..2 {
            let recovered = normalized[col] * (max[col] - min[col]) + min[col];
            assert!(
                (recovered - raw[row_idx][col]).abs() < 1e-9,
                "row {row_idx} col {col}: {recovered} != {}",
                raw[row_idx][col]
            );
        }
    }
}

#[test]
fn constant_column_errors_by_default() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "a;b;quality\n2;1;5\n2;3;6\n");
    let output = dir.path().join("out.csv");

    let result = normalize_file(&NormalizerConfig::new(&input, &output));
    match result {
        Err(NormalizeError::ConstantColumn { column, value }) => {
            assert_eq!(column, "a");
            assert_eq!(value, 2.0);
        }
        other => panic!("expected ConstantColumn error, got {other:?}"),
    }
    // Fails before any output is written.
    assert!(!output.exists());
}

#[test]
fn constant_column_zero_mode_writes_zeros() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "a;b;quality\n2;1;5\n2;3;6\n");
    let output = dir.path().join("out.csv");

    let config =
        NormalizerConfig::new(&input, &output).with_constant_columns(ConstantColumnMode::Zero);
    normalize_file(&config).expect("normalize");

    let lines = read_lines(&output);
    assert_row_eq(&lines[3], &[0.0, 0.0, 5.0]);
    assert_row_eq(&lines[4], &[0.0, 1.0, 6.0]);
}

#[test]
fn constant_excluded_column_is_allowed() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "a;quality\n1;6\n3;6\n");
    let output = dir.path().join("out.csv");

    let report = normalize_file(&NormalizerConfig::new(&input, &output)).expect("normalize");
    assert_eq!(report.rows, 2);

    let lines = read_lines(&output);
    assert_row_eq(&lines[3], &[0.0, 6.0]);
    assert_row_eq(&lines[4], &[1.0, 6.0]);
}

#[test]
fn parse_error_names_column_and_row() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "a;quality\n1;5\nx;6\n");
    let output = dir.path().join("out.csv");

    let result = normalize_file(&NormalizerConfig::new(&input, &output));
    match result {
        Err(NormalizeError::Parse { column, row, value }) => {
            assert_eq!(column, "a");
            assert_eq!(row, 2);
            assert_eq!(value, "x");
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn missing_excluded_column_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "a;b\n1;2\n");
    let output = dir.path().join("out.csv");

    let config = NormalizerConfig::new(&input, &output).with_excluded_column("label");
    let result = normalize_file(&config);
    match result {
        Err(NormalizeError::ExcludedColumnNotFound { column, .. }) => {
            assert_eq!(column, "label");
        }
        other => panic!("expected ExcludedColumnNotFound, got {other:?}"),
    }
}

#[test]
fn header_only_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "a;b;quality\n");
    let output = dir.path().join("out.csv");

    let result = normalize_file(&NormalizerConfig::new(&input, &output));
    assert!(matches!(result, Err(NormalizeError::EmptyInput { .. })));
}

#[test]
fn comma_delimiter_round_trips() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "a,label\n10,1\n20,2\n");
    let output = dir.path().join("out.csv");

    let config = NormalizerConfig::new(&input, &output)
        .with_delimiter(b',')
        .with_excluded_column("label");
    normalize_file(&config).expect("normalize");

    let lines = read_lines(&output);
    assert_eq!(lines[0], "a,label");
    let last = parse_row(&lines[4], ',');
    assert!((last[0] - 1.0).abs() < 1e-12);
}

#[test]
fn collect_stats_matches_dataset_extremes() {
    let dir = TempDir::new().unwrap();
    // Strictly decreasing first column: running max must still end correct.
    let input = write_input(&dir, "in.csv", "a;b\n5;1\n3;9\n1;4\n");

    let stats = collect_stats(&input, b';').expect("collect");
    let a = stats.get("a").unwrap();
    assert_eq!(a.min, 1.0);
    assert_eq!(a.max, 5.0);
    let b = stats.get("b").unwrap();
    assert_eq!(b.min, 1.0);
    assert_eq!(b.max, 9.0);
}

#[test]
fn stats_cover_the_excluded_column() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "a;quality\n1;5\n2;7\n");
    let output = dir.path().join("out.csv");

    normalize_file(&NormalizerConfig::new(&input, &output)).expect("normalize");

    let lines = read_lines(&output);
    assert_row_eq(&lines[1], &[1.0, 5.0]);
    assert_row_eq(&lines[2], &[2.0, 7.0]);
}
