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

//! Benchlog Command Line Interface

use benchlog_cli::cli::Commands;
use benchlog_cli::report;
use benchlog_core::ParseOptions;
use clap::{ArgAction, Parser};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Benchlog - solver benchmark log analysis
///
/// # Examples
///
/// ```bash
/// # Table, CSV and summary from the default log
/// benchlog analyze
///
/// # See how a log was parsed
/// benchlog inspect results/test_results.txt
///
/// # Charts as SVG, without opening a viewer
/// benchlog plot --output results/graphs.svg --no-open
/// ```
#[derive(Parser)]
#[command(name = "benchlog")]
#[command(author, version, about = "Benchlog - solver benchmark log analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Trace every section, block and field lookup of the parser
    #[arg(long, global = true)]
    trace: bool,
}

fn init_logging(verbose: u8, trace: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let filter = EnvFilter::new(format!("benchlog={}", level));
        if trace {
            filter.add_directive("benchlog_core=trace".parse().expect("valid log directive"))
        } else {
            filter
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.trace);

    let options = ParseOptions::builder().trace(cli.trace).build();
    match cli.command.execute(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.wants_instructions() {
                eprint!("\n{}", report::instructions());
            }
            ExitCode::FAILURE
        }
    }
}
