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

//! Benchlog CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **analyze**: results table, CSV export, best speedups and next steps
//! - **inspect**: segmentation and extraction diagnostics for a log
//! - **plot**: 2×2 performance chart from the CSV
//!
//! # Examples
//!
//! ```no_run
//! use benchlog_cli::commands::{analyze, DEFAULT_CSV, DEFAULT_INPUT};
//! use benchlog_core::ParseOptions;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), benchlog_cli::error::CliError> {
//! analyze(Path::new(DEFAULT_INPUT), Path::new(DEFAULT_CSV), &ParseOptions::default())?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod report;
