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

//! Performance charts for solver benchmark results.
//!
//! Rows read back from the performance CSV are grouped into a
//! [`ChartData`] and drawn as a 2×2 figure:
//!
//! 1. V1 speedup vs thread count, one line per puzzle
//! 2. mean V1/V2/V3 speedup per thread count over the hard puzzles
//! 3. single-thread backtrack counts per puzzle
//! 4. heatmap of mean V1 speedup by puzzle and thread count
//!
//! # Example
//!
//! ```no_run
//! use benchlog_chart::{plot, ChartConfig};
//! use benchlog_csv::from_csv;
//! use std::path::Path;
//!
//! let csv = std::fs::read_to_string("results/performance_data.csv").unwrap();
//! let rows = from_csv(&csv).unwrap();
//! plot(&rows, Path::new("results/performance_graphs.svg"), &ChartConfig::default()).unwrap();
//! ```

mod data;
mod error;
mod font;
mod render;

pub use data::{ChartData, Heatmap, SpeedupLine, StrategyMeans};
pub use error::{ChartError, Result};
pub use render::{render_chart, ChartConfig, ImageFormat};

use benchlog_csv::CsvRow;
use std::path::Path;

/// Group `rows` and render them to `path`.
///
/// # Errors
///
/// [`ChartError::NoData`] for an empty row set, [`ChartError::Font`] when
/// the bundled font cannot be loaded, [`ChartError::Drawing`] when the image
/// cannot be produced.
pub fn plot(rows: &[CsvRow], path: &Path, config: &ChartConfig) -> Result<ChartData> {
    let data = ChartData::from_rows(rows)?;
    render_chart(&data, path, config)?;
    Ok(data)
}
