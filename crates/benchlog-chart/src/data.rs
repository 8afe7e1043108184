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

//! Grouping and averaging of CSV rows into the four chart panels.

use crate::error::{ChartError, Result};
use benchlog_core::{PuzzleLabel, Strategy};
use benchlog_csv::CsvRow;
use std::collections::BTreeMap;

/// V1 speedup of one puzzle across thread counts.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedupLine {
    /// Puzzle.
    pub puzzle: PuzzleLabel,
    /// `(threads, v1 speedup)` points, threads ascending.
    pub points: Vec<(u32, f64)>,
}

/// Mean speedup of each strategy at one thread count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyMeans {
    /// Thread count.
    pub threads: u32,
    /// Means indexed by strategy (V1, V2, V3).
    pub means: [f64; 3],
}

impl StrategyMeans {
    /// Mean speedup of `strategy`.
    pub fn mean(&self, strategy: Strategy) -> f64 {
        self.means[strategy as usize]
    }
}

/// Mean V1 speedup by puzzle (rows) and thread count (columns).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Heatmap {
    /// Row labels.
    pub puzzles: Vec<PuzzleLabel>,
    /// Column labels.
    pub threads: Vec<u32>,
    /// `cells[row][col]`; `None` where no row of the CSV covers the pair.
    pub cells: Vec<Vec<Option<f64>>>,
}

impl Heatmap {
    /// Largest cell value, if any.
    pub fn max(&self) -> Option<f64> {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .copied()
            .reduce(f64::max)
    }
}

/// Everything the chart needs, already grouped.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Panel 1: V1 speedup vs thread count, one line per puzzle.
    pub v1_lines: Vec<SpeedupLine>,
    /// Panel 2: strategy means over the hard puzzles, threads ascending.
    pub strategy_means: Vec<StrategyMeans>,
    /// Panel 3: backtrack counts of the single-thread runs, in file order.
    pub backtracks: Vec<(PuzzleLabel, u64)>,
    /// Panel 4: V1 speedup heatmap.
    pub heatmap: Heatmap,
}

impl ChartData {
    /// Group CSV rows into panel data.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::NoData`] when `rows` is empty.
    pub fn from_rows(rows: &[CsvRow]) -> Result<Self> {
        if rows.is_empty() {
            return Err(ChartError::NoData);
        }
        Ok(Self {
            v1_lines: v1_lines(rows),
            strategy_means: strategy_means(rows),
            backtracks: rows
                .iter()
                .filter(|r| r.threads == 1)
                .map(|r| (r.puzzle, r.backtracks))
                .collect(),
            heatmap: heatmap(rows),
        })
    }

    /// Smallest and largest thread count in the data.
    pub fn thread_range(&self) -> (u32, u32) {
        let threads = self.heatmap.threads.iter().copied();
        let min = threads.clone().min().unwrap_or(1);
        let max = threads.max().unwrap_or(1);
        (min, max)
    }
}

fn v1_lines(rows: &[CsvRow]) -> Vec<SpeedupLine> {
    let mut lines: BTreeMap<PuzzleLabel, Vec<(u32, f64)>> = BTreeMap::new();
    for row in rows {
        lines
            .entry(row.puzzle)
            .or_default()
            .push((row.threads, row.v1_speedup));
    }
    lines
        .into_iter()
        .map(|(puzzle, mut points)| {
            points.sort_by_key(|&(threads, _)| threads);
            SpeedupLine { puzzle, points }
        })
        .collect()
}

fn strategy_means(rows: &[CsvRow]) -> Vec<StrategyMeans> {
    let mut sums: BTreeMap<u32, ([f64; 3], usize)> = BTreeMap::new();
    for row in rows.iter().filter(|r| PuzzleLabel::HARD.contains(&r.puzzle)) {
        let (sum, n) = sums.entry(row.threads).or_insert(([0.0; 3], 0));
        sum[0] += row.v1_speedup;
        sum[1] += row.v2_speedup;
        sum[2] += row.v3_speedup;
        *n += 1;
    }
    sums.into_iter()
        .map(|(threads, (sum, n))| StrategyMeans {
            threads,
            means: sum.map(|s| s / n as f64),
        })
        .collect()
}

fn heatmap(rows: &[CsvRow]) -> Heatmap {
    let mut sums: BTreeMap<(PuzzleLabel, u32), (f64, usize)> = BTreeMap::new();
    for row in rows {
        let (sum, n) = sums.entry((row.puzzle, row.threads)).or_insert((0.0, 0));
        *sum += row.v1_speedup;
        *n += 1;
    }

    let mut puzzles: Vec<PuzzleLabel> = sums.keys().map(|&(p, _)| p).collect();
    puzzles.dedup();
    let mut threads: Vec<u32> = sums.keys().map(|&(_, t)| t).collect();
    threads.sort_unstable();
    threads.dedup();

    let cells = puzzles
        .iter()
        .map(|&p| {
            threads
                .iter()
                .map(|&t| sums.get(&(p, t)).map(|&(sum, n)| sum / n as f64))
                .collect()
        })
        .collect();

    Heatmap {
        puzzles,
        threads,
        cells,
    }
}
