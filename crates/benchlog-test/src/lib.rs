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

//! Shared test fixtures for benchlog crates.
//!
//! This crate synthesizes solver benchmark logs shaped like real harness
//! output, so parser, CSV and CLI tests exercise the same inputs.
//!
//! # Quick Start
//!
//! ```rust
//! use benchlog_test::fixtures;
//!
//! let log = fixtures::scenario();      // single record
//! let log = fixtures::full_run();      // 4 thread counts x 4 puzzles
//! let log = fixtures::sentinels();     // nan speedups everywhere
//!
//! use benchlog_test::fixtures::builders::{LogBuilder, PuzzleRun, SectionBuilder, EASY};
//!
//! let log = LogBuilder::new()
//!     .section(SectionBuilder::new(2).run(PuzzleRun::new(EASY).serial(0.002, 5)))
//!     .build();
//!
//! for (name, text) in fixtures::errors::malformed_logs() {
//!     // feed to the parser
//! }
//! ```

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> String)>;

/// Write all fixtures to a directory as .txt files.
#[cfg(feature = "generate")]
pub fn write_fixtures_to_dir(dir: &std::path::Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    for (name, fixture_fn) in fixtures::all() {
        std::fs::write(dir.join(format!("{}.txt", name)), fixture_fn())?;
    }
    Ok(())
}

/// Canned benchmark logs and builders.
pub mod fixtures;

pub use fixtures::*;

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_every_fixture_except_no_boundaries_has_a_boundary() {
        let boundary = Regex::new(r"=== \d+ THREADS? ===").unwrap();
        for (name, fixture_fn) in fixtures::all() {
            let has = boundary.is_match(&fixture_fn());
            assert_eq!(has, name != "no_boundaries", "fixture {}", name);
        }
    }

    #[test]
    fn test_full_run_shape() {
        let log = fixtures::full_run();
        let boundary = Regex::new(r"=== (\d+) THREADS? ===").unwrap();
        let threads: Vec<u32> = boundary
            .captures_iter(&log)
            .map(|c| c[1].parse().unwrap())
            .collect();
        assert_eq!(threads, logs::FULL_RUN_THREADS.to_vec());
        assert_eq!(log.matches("=== SERIAL VERSION ===").count(), 16);
        assert_eq!(log.matches("=== PARALLEL V3").count(), 16);
        assert!(log.contains("=== 1 THREAD ===\n"));
    }

    #[test]
    fn test_sentinel_tokens_are_verbatim() {
        let log = fixtures::sentinels();
        assert!(log.contains("Speedup: -nan(ind)x"));
        assert!(log.contains("Speedup: nan(ind)x"));
        assert!(log.contains("Speedup: -nanx"));
    }

    #[test]
    fn test_speedup_ratio_is_formatted_with_two_decimals() {
        use fixtures::builders::{PuzzleRun, EASY};
        let text = PuzzleRun::new(EASY).serial(0.003, 1).parallel(2, 0.002, 1).render();
        assert!(text.contains("Speedup: 1.50x"));
        assert!(text.contains("✗ PARALLEL V1: No solution found"));
    }
}
