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

//! Structured error types for the benchlog CLI.

use benchlog_chart::ChartError;
use benchlog_core::LogError;
use benchlog_csv::CsvError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for benchlog CLI operations.
///
/// # Examples
///
/// ```
/// use benchlog_cli::error::CliError;
///
/// let err = CliError::InputNotFound("results/test_results.txt".into());
/// assert_eq!(err.to_string(), "Input file not found: results/test_results.txt");
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// The input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// I/O operation failed (file read, write, or directory creation).
    #[error("I/O error for '{}': {source}", path.display())]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The log could not be read as text.
    #[error("Log error: {0}")]
    Log(#[from] LogError),

    /// CSV export or import failed.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Chart rendering failed.
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    /// Report formatting failed.
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the user should be shown how to produce a log.
    pub fn wants_instructions(&self) -> bool {
        matches!(self, CliError::InputNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "results/performance_data.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "I/O error for 'results/performance_data.csv': denied"
        );
        assert!(!err.wants_instructions());
    }

    #[test]
    fn test_from_conversions() {
        let log: CliError = LogError::InvalidUtf8 { offset: 3 }.into();
        assert!(matches!(log, CliError::Log(_)));

        let csv: CliError = CsvError::MissingColumn("Threads".to_string()).into();
        assert_eq!(csv.to_string(), "CSV error: Missing required column: Threads");

        let chart: CliError = ChartError::NoData.into();
        assert!(matches!(chart, CliError::Chart(ChartError::NoData)));
    }

    #[test]
    fn test_missing_input_wants_instructions() {
        assert!(CliError::InputNotFound(PathBuf::from("x.txt")).wants_instructions());
    }
}
