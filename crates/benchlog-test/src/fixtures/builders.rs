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

//! Builder pattern for synthesizing benchmark logs.
//!
//! The output mirrors what the solver harness prints: a grid dump, a
//! verification line before every stats block, `=== LABEL ===` stats
//! blocks, `Speedup:` lines after each parallel run and a boxed summary.

use std::fmt::Write;

/// Puzzle header literals as printed by the harness.
pub const EASY: &str = "Easy Puzzle:";
/// Medium puzzle header.
pub const MEDIUM: &str = "Medium Puzzle:";
/// AI Escargot puzzle header.
pub const AI_ESCARGOT: &str = "AI Escargot:";
/// Platinum Blonde puzzle header.
pub const PLATINUM: &str = "Platinum Blonde:";

/// All puzzle headers in harness order.
pub const HEADERS: [&str; 4] = [EASY, MEDIUM, AI_ESCARGOT, PLATINUM];

const STRATEGY_BANNERS: [(&str, &str); 3] = [
    ("PARALLEL V1 (Tasks)", "PARALLEL V1 (OpenMP Tasks with Work Stealing)"),
    ("PARALLEL V2 (Speculative)", "PARALLEL V2 (Speculative Parallel For)"),
    ("PARALLEL V3 (Hybrid)", "PARALLEL V3 (Adaptive Hybrid Strategy)"),
];

/// Statistics of one solver run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    /// Wall time in seconds.
    pub time: f64,
    /// Nodes explored.
    pub nodes: u64,
    /// Backtrack count.
    pub backtracks: u64,
}

impl RunStats {
    /// Stats with a derived node count.
    pub fn new(time: f64, backtracks: u64) -> Self {
        Self {
            time,
            nodes: backtracks * 3 + 81,
            backtracks,
        }
    }
}

/// One puzzle's runs inside a thread section.
///
/// # Examples
///
/// ```
/// use benchlog_test::fixtures::builders::{PuzzleRun, EASY};
///
/// let text = PuzzleRun::new(EASY)
///     .serial(0.002, 5)
///     .parallel(1, 0.001, 5)
///     .render();
/// assert!(text.contains("=== SERIAL VERSION ==="));
/// assert!(text.contains("Speedup: 2.00x"));
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleRun {
    header: String,
    serial: Option<RunStats>,
    parallel: [Option<RunStats>; 3],
    speedup_tokens: [Option<String>; 3],
    summary: bool,
}

impl PuzzleRun {
    /// Start a run under the given puzzle header.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            serial: None,
            parallel: [None, None, None],
            speedup_tokens: [None, None, None],
            summary: true,
        }
    }

    /// Record the serial run.
    pub fn serial(mut self, time: f64, backtracks: u64) -> Self {
        self.serial = Some(RunStats::new(time, backtracks));
        self
    }

    /// Record parallel strategy `version` (1 to 3).
    ///
    /// # Panics
    ///
    /// Panics if `version` is not 1, 2 or 3.
    pub fn parallel(mut self, version: usize, time: f64, backtracks: u64) -> Self {
        self.parallel[version - 1] = Some(RunStats::new(time, backtracks));
        self
    }

    /// Print `token` verbatim as the speedup of strategy `version`
    /// (e.g. `-nan(ind)`), instead of the ratio of run times.
    pub fn speedup_token(mut self, version: usize, token: impl Into<String>) -> Self {
        self.speedup_tokens[version - 1] = Some(token.into());
        self
    }

    /// Leave out the boxed performance summary.
    pub fn without_summary(mut self) -> Self {
        self.summary = false;
        self
    }

    fn speedup_text(&self, index: usize) -> Option<String> {
        if let Some(token) = &self.speedup_tokens[index] {
            return Some(token.clone());
        }
        let serial = self.serial?;
        let parallel = self.parallel[index]?;
        Some(format!("{:.2}", serial.time / parallel.time))
    }

    /// Render the puzzle block, header included.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.header);
        out.push_str("Original Puzzle (51 empty cells):\n");
        push_grid(&mut out);
        out.push('\n');

        match &self.serial {
            Some(stats) => {
                out.push_str("✓ SERIAL: Solution verified as CORRECT\n");
                push_stats(&mut out, "SERIAL VERSION", stats);
                push_grid(&mut out);
                out.push('\n');
            }
            None => out.push_str("✗ SERIAL: No solution found\n\n"),
        }

        for (i, (short, banner)) in STRATEGY_BANNERS.iter().enumerate() {
            match &self.parallel[i] {
                Some(stats) => {
                    let _ = writeln!(out, "✓ {}: Solution verified as CORRECT", short);
                    push_stats(&mut out, banner, stats);
                    if let Some(speedup) = self.speedup_text(i) {
                        let _ = writeln!(out, "Speedup: {}x\n", speedup);
                    }
                }
                None => {
                    let tag = &short[..11];
                    let _ = writeln!(out, "✗ {}: No solution found\n", tag);
                }
            }
        }

        if self.summary {
            self.push_summary(&mut out);
        }
        out
    }

    fn push_summary(&self, out: &mut String) {
        let serial = self.serial.unwrap_or(RunStats::new(0.0, 0));
        out.push_str("╔═══════════════════════════════════════════════════════════╗\n");
        out.push_str("║                    PERFORMANCE SUMMARY                    ║\n");
        out.push_str("╠═══════════════════════════════════════════════════════════╣\n");
        let _ = writeln!(
            out,
            "║ Serial:       {:10.6} sec  │ Backtracks: {:10} ║",
            serial.time, serial.backtracks
        );
        for i in 0..3 {
            let time = self.parallel[i].map_or(0.0, |s| s.time);
            let speedup = self.speedup_text(i).unwrap_or_else(|| "inf".to_string());
            let _ = writeln!(
                out,
                "║ Parallel V{}:  {:10.6} sec  │ Speedup: {:>10}x ║",
                i + 1,
                time,
                speedup
            );
        }
        out.push_str("╚═══════════════════════════════════════════════════════════╝\n");
    }
}

fn push_stats(out: &mut String, label: &str, stats: &RunStats) {
    let _ = writeln!(out, "=== {} ===", label);
    let _ = writeln!(out, "Time taken: {:.6} seconds", stats.time);
    let _ = writeln!(out, "Nodes explored: {}", stats.nodes);
    let _ = writeln!(out, "Backtracks: {}", stats.backtracks);
    out.push_str("Naked singles: 12\nHidden singles: 4\nNaked pairs: 0\nPointing pairs: 0\n\n");
}

fn push_grid(out: &mut String) {
    for row in 0..9 {
        if row > 0 && row % 3 == 0 {
            out.push_str("------+-------+------\n");
        }
        for col in 0..9 {
            if col > 0 && col % 3 == 0 {
                out.push_str("| ");
            }
            let _ = write!(out, "{} ", (row * 3 + row / 3 + col) % 9 + 1);
        }
        out.push('\n');
    }
}

/// One `=== N THREADS ===` section.
#[derive(Debug, Clone)]
pub struct SectionBuilder {
    threads: u32,
    runs: Vec<PuzzleRun>,
}

impl SectionBuilder {
    /// Start a section for `threads`.
    pub fn new(threads: u32) -> Self {
        Self {
            threads,
            runs: Vec::new(),
        }
    }

    /// Append a puzzle run.
    pub fn run(mut self, run: PuzzleRun) -> Self {
        self.runs.push(run);
        self
    }

    /// Render the section, boundary included.
    pub fn render(&self) -> String {
        let noun = if self.threads == 1 { "THREAD" } else { "THREADS" };
        let mut out = format!("=== {} {} ===\n", self.threads, noun);
        let _ = writeln!(out, "OpenMP Max Threads: {}\n", self.threads);
        for run in &self.runs {
            out.push_str(&run.render());
            out.push('\n');
        }
        out
    }
}

/// Builder for a complete log file.
///
/// # Examples
///
/// ```
/// use benchlog_test::fixtures::builders::{LogBuilder, PuzzleRun, SectionBuilder, MEDIUM};
///
/// let log = LogBuilder::new()
///     .section(SectionBuilder::new(4).run(PuzzleRun::new(MEDIUM).serial(0.01, 40)))
///     .build();
/// assert!(log.contains("=== 4 THREADS ==="));
/// assert!(log.contains("Medium Puzzle:"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogBuilder {
    preamble: Option<String>,
    sections: Vec<SectionBuilder>,
}

impl LogBuilder {
    /// Create an empty log builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text printed before the first thread boundary.
    pub fn preamble(mut self, text: impl Into<String>) -> Self {
        self.preamble = Some(text.into());
        self
    }

    /// Append a thread section.
    pub fn section(mut self, section: SectionBuilder) -> Self {
        self.sections.push(section);
        self
    }

    /// Render the log.
    pub fn build(&self) -> String {
        let mut out = self.preamble.clone().unwrap_or_default();
        for section in &self.sections {
            out.push_str(&section.render());
        }
        out
    }
}
