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

//! Flat CSV row representation of a run record.

use benchlog_core::{PuzzleLabel, RunRecord};

/// Column names, in file order.
pub const CSV_HEADER: [&str; 7] = [
    "Threads",
    "Puzzle",
    "Serial Time",
    "V1 Speedup",
    "V2 Speedup",
    "V3 Speedup",
    "Backtracks",
];

/// One row of the performance CSV.
///
/// Unlike [`RunRecord`], every field has a value: fields the log did not
/// provide are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CsvRow {
    /// Thread count.
    pub threads: u32,
    /// Puzzle label.
    pub puzzle: PuzzleLabel,
    /// Serial time in seconds.
    pub serial_time: f64,
    /// V1 speedup.
    pub v1_speedup: f64,
    /// V2 speedup.
    pub v2_speedup: f64,
    /// V3 speedup.
    pub v3_speedup: f64,
    /// Backtrack count.
    pub backtracks: u64,
}

impl CsvRow {
    /// Build a row from a table entry, zero-filling absent fields.
    pub fn from_record(threads: u32, puzzle: PuzzleLabel, record: &RunRecord) -> Self {
        Self {
            threads,
            puzzle,
            serial_time: record.serial_time.unwrap_or(0.0),
            v1_speedup: record.v1_speedup.unwrap_or(0.0),
            v2_speedup: record.v2_speedup.unwrap_or(0.0),
            v3_speedup: record.v3_speedup.unwrap_or(0.0),
            backtracks: record.backtracks.unwrap_or(0),
        }
    }

    /// Cells as written to the file: serial time with 6 decimals,
    /// speedups with 2.
    pub fn to_fields(&self) -> [String; 7] {
        [
            self.threads.to_string(),
            self.puzzle.display_name().to_string(),
            format!("{:.6}", self.serial_time),
            format!("{:.2}", self.v1_speedup),
            format!("{:.2}", self.v2_speedup),
            format!("{:.2}", self.v3_speedup),
            self.backtracks.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_zero() {
        let record = RunRecord {
            v1_speedup: Some(1.2),
            ..Default::default()
        };
        let row = CsvRow::from_record(2, PuzzleLabel::Easy, &record);
        assert_eq!(
            row.to_fields(),
            ["2", "Easy", "0.000000", "1.20", "0.00", "0.00", "0"].map(String::from)
        );
    }

    #[test]
    fn test_multi_word_puzzle_name() {
        let row = CsvRow::from_record(8, PuzzleLabel::AiEscargot, &RunRecord::default());
        assert_eq!(row.to_fields()[1], "AI Escargot");
    }
}
