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

//! Core parser and data model for solver benchmark logs.
//!
//! The benchmark harness prints one section per thread count, each holding a
//! block per puzzle with a serial run and three parallel strategies:
//!
//! ```text
//! === 4 THREADS ===
//! Easy Puzzle:
//! === SERIAL VERSION ===
//! Time taken: 0.002500 seconds
//! Backtracks: 5
//! === PARALLEL V1 (OpenMP Tasks with Work Stealing) ===
//! Speedup: 1.20x
//! ```
//!
//! Parsing is split into small, independently testable stages:
//!
//! - [`segment`]: thread sections, puzzle blocks and `=== LABEL ===`
//!   sub-sections
//! - [`extract`]: numeric fields of one puzzle block
//! - [`aggregate`]: folding records into a [`ResultTable`] and ranking
//!   speedups
//!
//! [`parse`] runs all three.
//!
//! # Tolerance
//!
//! Missing sections, out-of-order puzzle headers and not-a-number speedups
//! are all valid input. A field that cannot be found or parsed is left out
//! of its [`RunRecord`]; nothing in the log content causes an error.

pub mod aggregate;
mod error;
pub mod extract;
mod limits;
mod parser;
mod puzzle;
mod record;
pub mod segment;

pub use aggregate::{aggregate, best_speedups, BestSpeedup, TOP_SPEEDUPS};
pub use error::{LogError, LogResult};
pub use extract::{Extraction, Extractor, UNDEFINED_SPEEDUP_FALLBACK};
pub use limits::Limits;
pub use parser::{
    parse, parse_text, parse_with_options, BlockReport, ParseOptions, ParseOptionsBuilder,
    ParseReport, SectionReport,
};
pub use puzzle::{PuzzleLabel, Strategy, UnknownPuzzle};
pub use record::{ResultTable, RunRecord};
