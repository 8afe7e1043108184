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

//! Commands that parse a benchmark log.

use crate::commands::{self, DEFAULT_CSV, DEFAULT_INPUT};
use crate::error::CliError;
use benchlog_core::ParseOptions;
use clap::Subcommand;
use std::path::PathBuf;

/// Log analysis commands.
#[derive(Subcommand)]
pub enum AnalysisCommands {
    /// Print the results table and summary and export the CSV
    ///
    /// Parses the benchmark log, prints a markdown table of serial times,
    /// speedups and backtracks, writes the same data as CSV and lists the
    /// best speedups.
    Analyze {
        /// Benchmark log
        #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
        file: PathBuf,

        /// CSV output path (parent directories are created)
        #[arg(long, value_name = "PATH", default_value = DEFAULT_CSV)]
        csv: PathBuf,
    },

    /// Show how the log was segmented and what was extracted (debug)
    Inspect {
        /// Benchmark log
        #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
        file: PathBuf,
    },
}

impl AnalysisCommands {
    /// Execute the analysis command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self, options: &ParseOptions) -> Result<(), CliError> {
        match self {
            AnalysisCommands::Analyze { file, csv } => commands::analyze(&file, &csv, options),
            AnalysisCommands::Inspect { file } => commands::inspect(&file, options),
        }
    }
}
