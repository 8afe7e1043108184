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

//! Inspect command - segmentation and extraction diagnostics

use super::read_log;
use crate::error::CliError;
use benchlog_core::{ParseOptions, ParseReport, Strategy};
use colored::Colorize;
use std::fmt::{self, Write};
use std::path::Path;

/// Show what the parser found in a benchmark log.
///
/// For every thread section lists the puzzle blocks, whether each carries a
/// `SERIAL VERSION` sub-section, and the serial time and V1 speedup tokens
/// as printed in the log. Ends with the per-thread puzzle counts of the
/// aggregated table.
///
/// # Errors
///
/// Returns `Err` if the log is missing or unreadable.
pub fn inspect(file: &Path, options: &ParseOptions) -> Result<(), CliError> {
    let report = read_log(file, options)?;
    let mut out = String::new();
    render(&report, &mut out)?;
    print!("{}", out);
    Ok(())
}

fn render<W: Write>(report: &ParseReport, out: &mut W) -> fmt::Result {
    writeln!(out, "{}", "Benchmark Log".bold().underline())?;
    writeln!(
        out,
        "{} {}",
        "Thread sections found:".cyan(),
        report.sections.len()
    )?;

    for section in &report.sections {
        writeln!(
            out,
            "\n{}",
            format!("=== Processing {} threads section ===", section.threads).bold()
        )?;
        if section.blocks.is_empty() {
            writeln!(out, "  {}", "no puzzle headers".yellow())?;
        }
        for block in &section.blocks {
            let ex = &block.extraction;
            writeln!(out, "  Found {}", block.puzzle.display_name().green())?;
            writeln!(out, "    Puzzle data length: {} chars", block.len)?;
            if ex.has_serial_section {
                writeln!(out, "    Contains SERIAL VERSION section")?;
            } else {
                writeln!(out, "    {}", "MISSING SERIAL VERSION section".red())?;
            }
            match ex.record.serial_time {
                Some(t) => writeln!(out, "    Serial time: {}", t)?,
                None => writeln!(out, "    Serial time: {}", "NOT FOUND".red())?,
            }
            let v1 = ex
                .raw_speedups
                .iter()
                .find(|(s, _)| *s == Strategy::V1)
                .map(|(_, raw)| raw.as_str());
            if let Some(raw) = v1 {
                writeln!(out, "    V1 speedup: {}", raw)?;
            }
        }
    }

    writeln!(
        out,
        "\n\nFinal results table has {} thread counts",
        report.table.thread_counts().count()
    )?;
    for threads in report.table.thread_counts() {
        writeln!(
            out,
            "  {} threads: {} puzzles",
            threads,
            report.table.puzzles(threads).count()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchlog_core::parse_text;

    #[test]
    fn test_render_reports_blocks_and_counts() {
        colored::control::set_override(false);
        let log = "=== 2 THREADS ===\nEasy Puzzle:\n=== SERIAL VERSION ===\n\
Time taken: 0.002500 seconds\n=== PARALLEL V1 (Tasks) ===\nSpeedup: -nan(ind)x\n\
Medium Puzzle:\nBacktracks: 3\n";
        let report = parse_text(log, &ParseOptions::default());
        let mut text = String::new();
        render(&report, &mut text).unwrap();

        assert!(text.contains("Thread sections found: 1"));
        assert!(text.contains("=== Processing 2 threads section ==="));
        assert!(text.contains("  Found Easy"));
        assert!(text.contains("    Serial time: 0.0025"));
        assert!(text.contains("    V1 speedup: -nan(ind)"));
        assert!(text.contains("  Found Medium"));
        assert!(text.contains("MISSING SERIAL VERSION section"));
        assert!(text.contains("Serial time: NOT FOUND"));
        assert!(text.contains("  2 threads: 2 puzzles"));
    }

    struct FullBuffer {
        room: usize,
    }

    impl Write for FullBuffer {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if s.len() > self.room {
                return Err(fmt::Error);
            }
            self.room -= s.len();
            Ok(())
        }
    }

    #[test]
    fn test_render_propagates_write_errors() {
        let log = "=== 1 THREAD ===\nEasy Puzzle:\nBacktracks: 5\n";
        let report = parse_text(log, &ParseOptions::default());
        let mut sink = FullBuffer { room: 40 };
        assert_eq!(render(&report, &mut sink), Err(fmt::Error));

        let err: CliError = fmt::Error.into();
        assert!(matches!(err, CliError::Format(_)));
    }
}
