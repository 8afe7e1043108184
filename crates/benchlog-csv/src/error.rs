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

//! Error types for CSV export and import.

use thiserror::Error;

/// CSV conversion error types.
///
/// # Examples
///
/// ```
/// use benchlog_csv::CsvError;
///
/// let err = CsvError::MissingColumn("V1 Speedup".to_string());
/// assert_eq!(err.to_string(), "Missing required column: V1 Speedup");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// A header column the reader needs is absent.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A cell could not be converted to its column's type.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchlog_csv::CsvError;
    ///
    /// let err = CsvError::TypeMismatch {
    ///     row: 3,
    ///     column: "Threads".to_string(),
    ///     expected: "thread count".to_string(),
    ///     value: "four".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Type mismatch in row 3, column 'Threads': expected thread count, got 'four'"
    /// );
    /// ```
    #[error("Type mismatch in row {row}, column '{column}': expected {expected}, got '{value}'")]
    TypeMismatch {
        /// Data row number (1-based, header excluded).
        row: usize,
        /// Column name.
        column: String,
        /// Expected type description.
        expected: String,
        /// Cell content.
        value: String,
    },

    /// Output bytes were not valid UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// What was being produced.
        context: String,
    },

    /// I/O error during CSV reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),
}

/// Result type for CSV operations.
pub type Result<T> = std::result::Result<T, CsvError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let err = CsvError::from(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(matches!(err, CsvError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_invalid_utf8_display() {
        let err = CsvError::InvalidUtf8 {
            context: "CSV output".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid UTF-8 in CSV output");
    }
}
