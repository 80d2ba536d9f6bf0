/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn csvpart(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csvpart"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to run csvpart")
}

fn write_source(dir: &Path, name: &str, headers: usize, rows: usize) {
    let mut content = String::new();
    for i in 0..headers {
        content.push_str(&format!("# header {}\n", i));
    }
    for i in 0..rows {
        content.push_str(&format!("{},row{}\n", i, i));
    }
    fs::write(dir.join(name), content).unwrap();
}

fn data_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_splits_into_numbered_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_source(temp_dir.path(), "data.csv", 12, 123);

    let output = csvpart(
        temp_dir.path(),
        &["--filename", "data.csv", "--headers", "12", "--whole", "11", "12", "13.323"],
    );
    assert!(output.status.success(), "{:?}", output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Done"));

    let sizes: Vec<usize> = (0..4)
        .map(|i| data_lines(&temp_dir.path().join(format!("{}_data.csv", i))).len())
        .collect();
    assert_eq!(sizes, vec![14, 15, 16, 78]);
    assert!(!temp_dir.path().join("4_data.csv").exists());

    // 每个文件都以 12 行表头开始, 数据行按顺序不重叠
    let mut all = Vec::new();
    for i in 0..4 {
        let content = fs::read_to_string(temp_dir.path().join(format!("{}_data.csv", i))).unwrap();
        assert!(content.starts_with("# header 0\n"));
        assert_eq!(content.lines().filter(|l| l.starts_with('#')).count(), 12);
        all.extend(data_lines(&temp_dir.path().join(format!("{}_data.csv", i))));
    }
    let expected: Vec<String> = (0..123).map(|i| format!("{},row{}", i, i)).collect();
    assert_eq!(all, expected);
}

#[test]
fn test_out_dir_and_quiet() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(temp_dir.path().join("parts")).unwrap();
    write_source(temp_dir.path(), "data.csv", 1, 10);

    let output = csvpart(
        temp_dir.path(),
        &["-f", "data.csv", "-H", "1", "-o", "parts", "-q", "30", "70%"],
    );
    assert!(output.status.success(), "{:?}", output);
    assert!(output.stdout.is_empty());
    assert_eq!(data_lines(&temp_dir.path().join("parts/0_data.csv")).len(), 3);
    assert_eq!(data_lines(&temp_dir.path().join("parts/1_data.csv")).len(), 7);
}

#[test]
fn test_headers_exceeding_lines_fail() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_source(temp_dir.path(), "data.csv", 0, 1);

    let output = csvpart(temp_dir.path(), &["-f", "data.csv", "-H", "2", "100"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Headers cannot be larger"));
    assert!(!temp_dir.path().join("0_data.csv").exists());
}

#[test]
fn test_percentage_sum_over_100_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_source(temp_dir.path(), "data.csv", 0, 10);

    let output = csvpart(temp_dir.path(), &["-f", "data.csv", "-H", "0", "60", "50"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!temp_dir.path().join("0_data.csv").exists());
}

#[test]
fn test_overallocation_with_whole_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_source(temp_dir.path(), "data.csv", 0, 2);

    let output = csvpart(
        temp_dir.path(),
        &["-f", "data.csv", "-H", "0", "--whole", "25", "25", "25"],
    );
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--whole"));
    assert!(!temp_dir.path().join("0_data.csv").exists());
}

#[test]
fn test_missing_source_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = csvpart(temp_dir.path(), &["-f", "nope.csv", "-H", "0", "50"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_dry_run_prints_plan() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_source(temp_dir.path(), "data.csv", 0, 123);

    let output = csvpart(
        temp_dir.path(),
        &["-f", "data.csv", "-H", "0", "-n", "-w", "50"],
    );
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0_data.csv: 62 lines"));
    assert!(stdout.contains("1_data.csv: 61 lines"));
    assert!(!temp_dir.path().join("0_data.csv").exists());
}
