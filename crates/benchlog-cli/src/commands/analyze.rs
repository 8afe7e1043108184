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

//! Analyze command - results table, CSV export and summary

use super::{read_log, write_output};
use crate::error::CliError;
use crate::report;
use benchlog_core::ParseOptions;
use benchlog_csv::to_csv;
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Analyze a benchmark log.
///
/// Prints the markdown results table, writes the CSV to `csv_path` and
/// prints the summary and next steps. An empty result table prints the
/// instructions instead and writes nothing.
///
/// # Errors
///
/// Returns `Err` if the log is missing or unreadable or the CSV cannot be
/// written.
///
/// # Examples
///
/// ```no_run
/// use benchlog_cli::commands::analyze;
/// use benchlog_core::ParseOptions;
/// use std::path::Path;
///
/// # fn main() -> Result<(), benchlog_cli::error::CliError> {
/// analyze(
///     Path::new("results/test_results.txt"),
///     Path::new("results/performance_data.csv"),
///     &ParseOptions::default(),
/// )?;
/// # Ok(())
/// # }
/// ```
pub fn analyze(file: &Path, csv_path: &Path, options: &ParseOptions) -> Result<(), CliError> {
    print!("{}", report::banner());

    let table = read_log(file, options)?.table;
    if table.is_empty() {
        println!("\n{}", "No data found.".yellow().bold());
        print!("{}", report::instructions());
        return Ok(());
    }

    print!("{}", report::results_table(&table));

    let csv = to_csv(&table)?;
    write_output(&csv, csv_path)?;
    info!(rows = table.len(), path = %csv_path.display(), "wrote performance CSV");
    println!(
        "\n{} CSV data saved to {}",
        "✓".green().bold(),
        csv_path.display()
    );
    println!("  You can open this in Excel/Sheets to make graphs");

    print!("{}", report::summary(&table));
    println!("{}", report::next_steps(&csv_path.display().to_string()));
    Ok(())
}
