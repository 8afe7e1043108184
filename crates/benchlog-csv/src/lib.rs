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

//! CSV export and import for benchmark result tables.
//!
//! The file layout is fixed:
//!
//! ```text
//! Threads,Puzzle,Serial Time,V1 Speedup,V2 Speedup,V3 Speedup,Backtracks
//! 2,Easy,0.002500,1.20,0.00,0.00,5
//! ```
//!
//! [`to_csv`] writes one row per entry of a [`benchlog_core::ResultTable`]
//! (thread count ascending, then puzzle order), zero-filling fields the log
//! did not provide. [`from_csv`] reads such a file back as [`CsvRow`]s for
//! charting.

mod error;
mod from_csv;
mod row;
mod to_csv;

// Re-export public API
pub use error::{CsvError, Result};
pub use from_csv::{from_csv, from_csv_reader};
pub use row::{CsvRow, CSV_HEADER};
pub use to_csv::{
    to_csv, to_csv_with_config, to_csv_writer, to_csv_writer_with_config, ToCsvConfig,
};
