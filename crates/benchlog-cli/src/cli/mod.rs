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

//! CLI command definitions and argument parsing.
//!
//! - [`analysis`]: commands that read a benchmark log (analyze, inspect)
//! - [`chart`]: commands that read the performance CSV (plot)

mod analysis;
mod chart;

use benchlog_core::ParseOptions;
use clap::Subcommand;

pub use analysis::AnalysisCommands;
pub use chart::ChartCommands;

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Analysis (analyze, inspect)
/// └── Chart (plot)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Log commands - flattened to appear at top level
    #[command(flatten)]
    Analysis(AnalysisCommands),

    // Chart commands - flattened to appear at top level
    #[command(flatten)]
    Chart(ChartCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// `options` carries the global parser flags; chart commands ignore it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if reading input, writing output or rendering fails.
    pub fn execute(self, options: &ParseOptions) -> Result<(), crate::error::CliError> {
        match self {
            Commands::Analysis(cmd) => cmd.execute(options),
            Commands::Chart(cmd) => cmd.execute(),
        }
    }
}
