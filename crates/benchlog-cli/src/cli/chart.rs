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

//! Commands that render charts.

use crate::commands::{self, PlotOptions, DEFAULT_CHART, DEFAULT_CSV};
use crate::error::CliError;
use benchlog_chart::ChartConfig;
use clap::Subcommand;
use std::path::PathBuf;

/// Chart commands.
#[derive(Subcommand)]
pub enum ChartCommands {
    /// Render the four performance charts from the CSV
    ///
    /// The image format follows the output extension: `.svg` is written as
    /// SVG, anything else as a bitmap (PNG by default).
    Plot {
        /// Performance CSV written by `analyze`
        #[arg(value_name = "CSV", default_value = DEFAULT_CSV)]
        csv: PathBuf,

        /// Image output path
        #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CHART)]
        output: PathBuf,

        /// Do not open the image after writing it
        #[arg(long)]
        no_open: bool,

        /// Image width in pixels
        #[arg(long, default_value_t = ChartConfig::default().width)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = ChartConfig::default().height)]
        height: u32,
    },
}

impl ChartCommands {
    /// Execute the chart command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ChartCommands::Plot {
                csv,
                output,
                no_open,
                width,
                height,
            } => {
                let options = PlotOptions {
                    chart: ChartConfig {
                        width,
                        height,
                        ..Default::default()
                    },
                    open: !no_open,
                };
                commands::plot(&csv, &output, &options)
            }
        }
    }
}
