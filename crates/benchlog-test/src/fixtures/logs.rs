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

//! Canned benchmark logs.

use super::builders::{
    LogBuilder, PuzzleRun, SectionBuilder, AI_ESCARGOT, EASY, HEADERS, MEDIUM, PLATINUM,
};

/// Thread counts used by [`full_run`].
pub const FULL_RUN_THREADS: [u32; 4] = [1, 2, 4, 8];

/// Serial times of the four puzzles in [`full_run`], in header order.
pub const FULL_RUN_SERIAL: [f64; 4] = [0.000412, 0.003150, 0.184200, 1.372500];

/// Serial backtrack counts of the four puzzles in [`full_run`].
pub const FULL_RUN_BACKTRACKS: [u64; 4] = [0, 37, 1874, 15203];

/// The minimal single-record log used throughout the docs.
///
/// Expected: `{2: {Easy: {serial_time: 0.0025, v1_speedup: 1.20, backtracks: 5}}}`.
pub fn scenario() -> String {
    "=== 2 THREADS ===\nEasy Puzzle:\n=== SERIAL VERSION ===\nTime taken: 0.002500 seconds\n\
=== PARALLEL V1 (Tasks) ===\nSpeedup: 1.20x\nBacktracks: 5\n"
        .to_string()
}

/// [`scenario`] with the V1 speedup printed as `-nan(ind)`.
pub fn nan_speedup() -> String {
    scenario().replace("1.20x", "-nan(ind)x")
}

/// A realistic run: four thread counts, four puzzles, all strategies.
///
/// Parallel time for strategy `v` at `t` threads is
/// `serial / (1 + (t - 1) * efficiency_v)` with efficiencies 0.5, 0.3 and
/// 0.6, so every speedup is known in closed form.
pub fn full_run() -> String {
    let efficiencies = [0.5, 0.3, 0.6];
    let mut builder = LogBuilder::new().preamble("Sudoku benchmark run\nCompiler: gcc -fopenmp -O3\n\n");

    for threads in FULL_RUN_THREADS {
        let mut section = SectionBuilder::new(threads);
        for (i, header) in HEADERS.iter().enumerate() {
            let serial = FULL_RUN_SERIAL[i];
            let backtracks = FULL_RUN_BACKTRACKS[i];
            let mut run = PuzzleRun::new(*header).serial(serial, backtracks);
            for (v, eff) in efficiencies.iter().enumerate() {
                let time = serial / (1.0 + f64::from(threads - 1) * eff);
                run = run.parallel(v + 1, time, backtracks);
            }
            section = section.run(run);
        }
        builder = builder.section(section);
    }
    builder.build()
}

/// Puzzle headers out of order, one puzzle missing.
pub fn out_of_order() -> String {
    LogBuilder::new()
        .section(
            SectionBuilder::new(4)
                .run(PuzzleRun::new(PLATINUM).serial(1.5, 900).parallel(1, 0.5, 900))
                .run(PuzzleRun::new(EASY).serial(0.001, 0).parallel(1, 0.002, 0))
                .run(PuzzleRun::new(MEDIUM).serial(0.004, 30).parallel(2, 0.002, 30)),
        )
        .build()
}

/// A section where only some strategies ran and one puzzle has no serial run.
pub fn partial() -> String {
    LogBuilder::new()
        .section(
            SectionBuilder::new(1)
                .run(PuzzleRun::new(AI_ESCARGOT).parallel(1, 0.2, 1500).without_summary())
                .run(PuzzleRun::new(EASY).serial(0.0005, 2)),
        )
        .build()
}

/// Sentinel speedups for every strategy, as printed by MSVC and glibc.
pub fn sentinels() -> String {
    LogBuilder::new()
        .section(
            SectionBuilder::new(2).run(
                PuzzleRun::new(EASY)
                    .serial(0.0, 0)
                    .parallel(1, 0.0, 0)
                    .parallel(2, 0.0, 0)
                    .parallel(3, 0.0, 0)
                    .speedup_token(1, "-nan(ind)")
                    .speedup_token(2, "nan(ind)")
                    .speedup_token(3, "-nan"),
            ),
        )
        .build()
}

/// A log with puzzle output but no thread boundaries.
pub fn no_boundaries() -> String {
    PuzzleRun::new(EASY).serial(0.001, 1).parallel(1, 0.001, 1).render()
}
