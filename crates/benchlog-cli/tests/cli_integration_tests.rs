// Benchlog - Solver benchmark log analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use benchlog_test::fixtures;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Test helper to create a benchlog command without colors
fn benchlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("benchlog").expect("Failed to find benchlog binary");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// Test helper to write a log into a fresh directory
fn log_in_dir(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("test_results.txt");
    fs::write(&path, content).expect("Failed to write log");
    (dir, path)
}

fn analyze(dir: &Path, log: &Path) -> assert_cmd::assert::Assert {
    benchlog_cmd()
        .arg("analyze")
        .arg(log)
        .arg("--csv")
        .arg(dir.join("out/performance_data.csv"))
        .assert()
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    benchlog_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Benchlog - solver benchmark log analysis"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("plot"));
}

#[test]
fn test_version_output() {
    benchlog_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchlog"));
}

#[test]
fn test_no_subcommand_fails() {
    benchlog_cmd().assert().failure();
}

// ===== Analyze Command Tests =====

#[test]
fn test_analyze_scenario() {
    let (dir, log) = log_in_dir(&fixtures::scenario());

    analyze(dir.path(), &log)
        .success()
        .stdout(predicate::str::contains("SUDOKU SOLVER PERFORMANCE ANALYSIS"))
        .stdout(predicate::str::contains("## Performance Results Table"))
        .stdout(predicate::str::contains(
            "|       2 | Easy           |        0.002500 |       1.20 |       0.00 |       0.00 |          5 |",
        ))
        .stdout(predicate::str::contains("CSV data saved to"))
        .stdout(predicate::str::contains("- **Easy (2T)**: 1.20x"))
        .stdout(predicate::str::contains("NEXT STEPS FOR YOUR REPORT:"));

    let csv = fs::read_to_string(dir.path().join("out/performance_data.csv")).unwrap();
    assert_eq!(
        csv,
        "Threads,Puzzle,Serial Time,V1 Speedup,V2 Speedup,V3 Speedup,Backtracks\n\
         2,Easy,0.002500,1.20,0.00,0.00,5\n"
    );
}

#[test]
fn test_analyze_nan_speedup() {
    let (dir, log) = log_in_dir(&fixtures::nan_speedup());

    analyze(dir.path(), &log)
        .success()
        .stdout(predicate::str::contains(
            "|       2 | Easy           |        0.002500 |       0.00 |",
        ));

    let csv = fs::read_to_string(dir.path().join("out/performance_data.csv")).unwrap();
    assert!(csv.contains("2,Easy,0.002500,0.00,0.00,0.00,5"));
}

#[test]
fn test_analyze_full_run_ranks_best_speedups() {
    let (dir, log) = log_in_dir(&fixtures::full_run());

    let output = analyze(dir.path(), &log).success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let best: Vec<_> = stdout.lines().filter(|l| l.starts_with("- **")).collect();
    assert_eq!(best.len(), 5);
    assert!(best.iter().all(|l| l.contains("(8T)") || l.contains("(4T)")));

    let csv = fs::read_to_string(dir.path().join("out/performance_data.csv")).unwrap();
    assert_eq!(csv.lines().count(), 17);
}

#[test]
fn test_analyze_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("performance_data.csv");

    benchlog_cmd()
        .arg("analyze")
        .arg(dir.path().join("missing.txt"))
        .arg("--csv")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Input file not found"))
        .stderr(predicate::str::contains("Please run the tests first"));

    assert!(!csv.exists());
}

#[test]
fn test_analyze_no_data() {
    let (dir, log) = log_in_dir(&fixtures::no_boundaries());

    analyze(dir.path(), &log)
        .success()
        .stdout(predicate::str::contains("No data found."))
        .stdout(predicate::str::contains("1. Compile:"));

    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_analyze_trace_goes_to_stderr() {
    let (dir, log) = log_in_dir(&fixtures::scenario());

    benchlog_cmd()
        .arg("--trace")
        .arg("analyze")
        .arg(&log)
        .arg("--csv")
        .arg(dir.path().join("data.csv"))
        .assert()
        .success()
        .stderr(predicate::str::contains("TRACE"))
        .stdout(predicate::str::contains("TRACE").not());
}

// ===== Inspect Command Tests =====

#[test]
fn test_inspect_reports_sections() {
    let (_dir, log) = log_in_dir(&fixtures::full_run());

    benchlog_cmd()
        .arg("inspect")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("Thread sections found: 4"))
        .stdout(predicate::str::contains("=== Processing 8 threads section ==="))
        .stdout(predicate::str::contains("Found AI Escargot"))
        .stdout(predicate::str::contains("Contains SERIAL VERSION section"))
        .stdout(predicate::str::contains("  8 threads: 4 puzzles"));
}

#[test]
fn test_inspect_partial_log() {
    let (_dir, log) = log_in_dir(&fixtures::partial());

    benchlog_cmd()
        .arg("inspect")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("Serial time: NOT FOUND"));
}

// ===== Plot Command Tests =====

#[test]
fn test_analyze_then_plot_svg() {
    let (dir, log) = log_in_dir(&fixtures::full_run());
    analyze(dir.path(), &log).success();

    let image = dir.path().join("charts/graphs.svg");
    benchlog_cmd()
        .arg("plot")
        .arg(dir.path().join("out/performance_data.csv"))
        .arg("--output")
        .arg(&image)
        .arg("--no-open")
        .args(["--width", "900", "--height", "700"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graphs saved to"))
        .stdout(predicate::str::contains("Opening").not());

    let svg = fs::read_to_string(&image).unwrap();
    assert!(svg.contains("Sudoku Solver Performance Analysis"));
    assert!(svg.contains("width=\"900\""));
}

#[test]
fn test_analyze_then_plot_default_png() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("results")).unwrap();
    fs::write(dir.path().join("results/test_results.txt"), fixtures::full_run()).unwrap();

    benchlog_cmd()
        .current_dir(dir.path())
        .arg("analyze")
        .assert()
        .success();

    benchlog_cmd()
        .current_dir(dir.path())
        .arg("plot")
        .arg("--no-open")
        .assert()
        .success()
        .stdout(predicate::str::contains("Graphs saved to"));

    let png = fs::read(dir.path().join("results/performance_graphs.png")).unwrap();
    assert!(png.starts_with(b"\x89PNG"));
}

#[test]
fn test_plot_missing_csv() {
    let dir = tempfile::tempdir().unwrap();

    benchlog_cmd()
        .arg("plot")
        .arg(dir.path().join("none.csv"))
        .arg("--no-open")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Input file not found"));
}

#[test]
fn test_plot_malformed_csv() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("bad.csv");
    fs::write(&csv, "Threads,Puzzle\n1,Easy\n").unwrap();

    benchlog_cmd()
        .arg("plot")
        .arg(&csv)
        .arg("--output")
        .arg(dir.path().join("g.svg"))
        .arg("--no-open")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required column: Serial Time"));
}
