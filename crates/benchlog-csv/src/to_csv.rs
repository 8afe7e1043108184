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

//! Write result tables as CSV.

use crate::error::{CsvError, Result};
use crate::row::{CsvRow, CSV_HEADER};
use benchlog_core::ResultTable;
use std::io::Write;

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
        }
    }
}

/// Convert a result table to a CSV string.
///
/// Only keys present in the table produce rows; absent fields inside a
/// present record are written as zero.
///
/// # Example
/// ```
/// use benchlog_core::parse;
/// use benchlog_csv::to_csv;
///
/// let log = "=== 2 THREADS ===\nEasy Puzzle:\nBacktracks: 5\n";
/// let table = parse(log.as_bytes()).unwrap();
/// let csv = to_csv(&table).unwrap();
/// assert!(csv.ends_with("2,Easy,0.000000,0.00,0.00,0.00,5\n"));
/// ```
pub fn to_csv(table: &ResultTable) -> Result<String> {
    to_csv_with_config(table, ToCsvConfig::default())
}

/// Convert a result table to a CSV string with custom configuration.
pub fn to_csv_with_config(table: &ResultTable, config: ToCsvConfig) -> Result<String> {
    // ~48 bytes per row plus header
    let mut buffer = Vec::with_capacity(80 + table.len() * 48);
    to_csv_writer_with_config(table, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Write a result table as CSV to a writer.
///
/// # Example
/// ```no_run
/// use benchlog_core::ResultTable;
/// use benchlog_csv::to_csv_writer;
/// use std::fs::File;
///
/// let table = ResultTable::new();
/// let file = File::create("performance_data.csv").unwrap();
/// to_csv_writer(&table, file).unwrap();
/// ```
pub fn to_csv_writer<W: Write>(table: &ResultTable, writer: W) -> Result<()> {
    to_csv_writer_with_config(table, writer, ToCsvConfig::default())
}

/// Write a result table as CSV to a writer with custom configuration.
pub fn to_csv_writer_with_config<W: Write>(
    table: &ResultTable,
    writer: W,
    config: ToCsvConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    if config.include_headers {
        wtr.write_record(CSV_HEADER)?;
    }

    for (threads, puzzle, record) in table.iter() {
        let row = CsvRow::from_record(threads, puzzle, record);
        wtr.write_record(row.to_fields())?;
    }

    wtr.flush()?;
    Ok(())
}
