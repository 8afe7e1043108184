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

//! Aggregation of extracted records and best-speedup ranking.

use crate::puzzle::PuzzleLabel;
use crate::record::{ResultTable, RunRecord};

/// Number of entries in the best-speedup ranking.
pub const TOP_SPEEDUPS: usize = 5;

/// Best speedup achieved for one (thread count, puzzle) key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestSpeedup {
    /// Thread count.
    pub threads: u32,
    /// Puzzle label.
    pub puzzle: PuzzleLabel,
    /// `max(v1, v2, v3)` with absent speedups counted as 0.0.
    pub speedup: f64,
}

/// Fold `(threads, puzzle, record)` triples into a [`ResultTable`].
///
/// Later records overwrite only the fields they carry. Empty records are
/// dropped without creating their key.
pub fn aggregate<'a, I>(records: I) -> ResultTable
where
    I: IntoIterator<Item = (u32, PuzzleLabel, &'a RunRecord)>,
{
    let mut table = ResultTable::new();
    extend(&mut table, records);
    table
}

/// Fold more records into an existing table.
pub fn extend<'a, I>(table: &mut ResultTable, records: I)
where
    I: IntoIterator<Item = (u32, PuzzleLabel, &'a RunRecord)>,
{
    for (threads, puzzle, record) in records {
        table.insert_record(threads, puzzle, record);
    }
}

/// Rank every key by its best speedup and keep the top `limit`.
///
/// Sorting is stable and descending, so ties keep table order (threads
/// ascending, then puzzle order).
pub fn best_speedups(table: &ResultTable, limit: usize) -> Vec<BestSpeedup> {
    let mut ranked: Vec<BestSpeedup> = table
        .iter()
        .map(|(threads, puzzle, record)| BestSpeedup {
            threads,
            puzzle,
            speedup: record.best_speedup(),
        })
        .collect();

    ranked.sort_by(|a, b| b.speedup.total_cmp(&a.speedup));
    ranked.truncate(limit);
    ranked
}
