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

//! Run records and the result table they are aggregated into.

use crate::puzzle::{PuzzleLabel, Strategy};
use std::collections::BTreeMap;

/// Fields extracted for one (thread count, puzzle) pair.
///
/// Every field is independently optional: `None` means the value was not
/// found in the log, which renderers display as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunRecord {
    /// Serial solve time in seconds.
    pub serial_time: Option<f64>,
    /// Speedup of the task-based strategy.
    pub v1_speedup: Option<f64>,
    /// Speedup of the speculative strategy.
    pub v2_speedup: Option<f64>,
    /// Speedup of the hybrid strategy.
    pub v3_speedup: Option<f64>,
    /// Backtrack count reported for the puzzle.
    pub backtracks: Option<u64>,
}

impl RunRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Speedup recorded for `strategy`, if any.
    pub fn speedup(&self, strategy: Strategy) -> Option<f64> {
        match strategy {
            Strategy::V1 => self.v1_speedup,
            Strategy::V2 => self.v2_speedup,
            Strategy::V3 => self.v3_speedup,
        }
    }

    /// Set the speedup for `strategy`.
    pub fn set_speedup(&mut self, strategy: Strategy, value: f64) {
        let slot = match strategy {
            Strategy::V1 => &mut self.v1_speedup,
            Strategy::V2 => &mut self.v2_speedup,
            Strategy::V3 => &mut self.v3_speedup,
        };
        *slot = Some(value);
    }

    /// Largest speedup across the three strategies, absent fields counting as 0.0.
    pub fn best_speedup(&self) -> f64 {
        Strategy::ALL
            .into_iter()
            .map(|s| self.speedup(s).unwrap_or(0.0))
            .fold(0.0, f64::max)
    }

    /// `true` when no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.serial_time.is_none()
            && self.v1_speedup.is_none()
            && self.v2_speedup.is_none()
            && self.v3_speedup.is_none()
            && self.backtracks.is_none()
    }

    /// Overwrite the fields present in `other`, keeping the rest.
    pub fn merge(&mut self, other: &RunRecord) {
        if other.serial_time.is_some() {
            self.serial_time = other.serial_time;
        }
        if other.v1_speedup.is_some() {
            self.v1_speedup = other.v1_speedup;
        }
        if other.v2_speedup.is_some() {
            self.v2_speedup = other.v2_speedup;
        }
        if other.v3_speedup.is_some() {
            self.v3_speedup = other.v3_speedup;
        }
        if other.backtracks.is_some() {
            self.backtracks = other.backtracks;
        }
    }
}

/// Records keyed by thread count, then puzzle label.
///
/// Iteration is always thread count ascending, then puzzles in
/// [`PuzzleLabel::ALL`] order, independent of insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    entries: BTreeMap<u32, BTreeMap<PuzzleLabel, RunRecord>>,
}

impl ResultTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the record for a key, inserting an empty one first if it is missing.
    pub fn record_mut_or_insert(&mut self, threads: u32, puzzle: PuzzleLabel) -> &mut RunRecord {
        self.entries
            .entry(threads)
            .or_default()
            .entry(puzzle)
            .or_default()
    }

    /// Merge `record` into the entry for the key (last write wins per field).
    ///
    /// An empty record is ignored and does not create the key.
    pub fn insert_record(&mut self, threads: u32, puzzle: PuzzleLabel, record: &RunRecord) {
        if record.is_empty() {
            return;
        }
        self.record_mut_or_insert(threads, puzzle).merge(record);
    }

    /// Look up a record.
    pub fn get(&self, threads: u32, puzzle: PuzzleLabel) -> Option<&RunRecord> {
        self.entries.get(&threads)?.get(&puzzle)
    }

    /// Puzzles recorded for a thread count, in output order.
    pub fn puzzles(&self, threads: u32) -> impl Iterator<Item = (PuzzleLabel, &RunRecord)> {
        self.entries
            .get(&threads)
            .into_iter()
            .flat_map(|m| m.iter().map(|(p, r)| (*p, r)))
    }

    /// Thread counts present, ascending.
    pub fn thread_counts(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    /// All `(threads, puzzle, record)` triples in output order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, PuzzleLabel, &RunRecord)> {
        self.entries.iter().flat_map(|(threads, puzzles)| {
            puzzles
                .iter()
                .map(move |(puzzle, record)| (*threads, *puzzle, record))
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    /// `true` when the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
