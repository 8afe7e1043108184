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

//! Plot command - performance chart from the CSV

use super::ensure_parent_dir;
use crate::error::CliError;
use benchlog_chart::{plot as draw, ChartConfig};
use benchlog_csv::from_csv;
use colored::Colorize;
use std::fs;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// Options of the `plot` command.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Chart settings.
    pub chart: ChartConfig,
    /// Open the image in the platform viewer afterwards.
    pub open: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            chart: ChartConfig::default(),
            open: true,
        }
    }
}

/// Render the performance chart from a CSV written by `analyze`.
///
/// # Errors
///
/// Returns `Err` if the CSV is missing or malformed, has no rows, or the
/// image cannot be written. Failing to launch the viewer is only a warning.
pub fn plot(csv_path: &Path, output: &Path, options: &PlotOptions) -> Result<(), CliError> {
    if !csv_path.exists() {
        return Err(CliError::InputNotFound(csv_path.to_path_buf()));
    }
    let text = fs::read_to_string(csv_path).map_err(|e| CliError::io_error(csv_path, e))?;
    let rows = from_csv(&text)?;

    ensure_parent_dir(output)?;
    let data = draw(&rows, output, &options.chart)?;
    info!(
        rows = rows.len(),
        lines = data.v1_lines.len(),
        path = %output.display(),
        "rendered chart"
    );
    println!(
        "{} Graphs saved to: {}",
        "✓".green().bold(),
        output.display()
    );

    if options.open {
        println!("\nOpening the graph...");
        if let Err(e) = open_in_viewer(output) {
            warn!(error = %e, "could not open image viewer");
            eprintln!("{} could not open viewer: {}", "Warning:".yellow(), e);
        }
    }
    Ok(())
}

/// Launch the platform's default viewer for `path` without waiting for it.
pub fn open_in_viewer(path: &Path) -> io::Result<()> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}
