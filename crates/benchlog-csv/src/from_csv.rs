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

//! Read performance CSV files back into rows.

use crate::error::{CsvError, Result};
use crate::row::{CsvRow, CSV_HEADER};
use benchlog_core::PuzzleLabel;
use std::io::Read;
use std::str::FromStr;

/// Parse CSV text produced by [`crate::to_csv`].
///
/// Columns are located by header name, so extra columns and reordering
/// are tolerated. Cells are trimmed.
///
/// # Example
/// ```
/// use benchlog_core::PuzzleLabel;
/// use benchlog_csv::from_csv;
///
/// let csv = "Threads,Puzzle,Serial Time,V1 Speedup,V2 Speedup,V3 Speedup,Backtracks\n\
///            4,AI Escargot,0.184200,2.50,1.90,2.80,1874\n";
/// let rows = from_csv(csv).unwrap();
/// assert_eq!(rows[0].puzzle, PuzzleLabel::AiEscargot);
/// assert_eq!(rows[0].v3_speedup, 2.8);
/// ```
pub fn from_csv(text: &str) -> Result<Vec<CsvRow>> {
    from_csv_reader(text.as_bytes())
}

/// Parse performance CSV from a reader.
pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<CsvRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut index = [0usize; 7];
    for (slot, name) in index.iter_mut().zip(CSV_HEADER) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| CsvError::MissingColumn(name.to_string()))?;
    }

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;
        let cell = |col: usize| record.get(index[col]).unwrap_or("");

        rows.push(CsvRow {
            threads: parse_cell(row, 0, cell(0), "thread count")?,
            puzzle: parse_cell::<PuzzleLabel>(row, 1, cell(1), "puzzle label")?,
            serial_time: parse_cell(row, 2, cell(2), "seconds")?,
            v1_speedup: parse_cell(row, 3, cell(3), "speedup")?,
            v2_speedup: parse_cell(row, 4, cell(4), "speedup")?,
            v3_speedup: parse_cell(row, 5, cell(5), "speedup")?,
            backtracks: parse_cell(row, 6, cell(6), "backtrack count")?,
        });
    }

    Ok(rows)
}

fn parse_cell<T: FromStr>(row: usize, col: usize, value: &str, expected: &str) -> Result<T> {
    value.parse::<T>().map_err(|_| CsvError::TypeMismatch {
        row,
        column: CSV_HEADER[col].to_string(),
        expected: expected.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Threads,Puzzle,Serial Time,V1 Speedup,V2 Speedup,V3 Speedup,Backtracks\n";

    #[test]
    fn test_reads_rows_in_file_order() {
        let text = format!("{HEADER}2,Easy,0.002500,1.20,0.00,0.00,5\n1,Platinum,1.372500,1.00,1.00,1.00,15203\n");
        let rows = from_csv(&text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].threads, 2);
        assert_eq!(rows[0].serial_time, 0.0025);
        assert_eq!(rows[1].puzzle, PuzzleLabel::Platinum);
        assert_eq!(rows[1].backtracks, 15203);
    }

    #[test]
    fn test_reordered_columns() {
        let text = "Puzzle,Backtracks,Threads,V3 Speedup,V2 Speedup,V1 Speedup,Serial Time,Notes\n\
                    Medium,37,4,2.80,1.90,2.50,0.003150,ok\n";
        let rows = from_csv(text).unwrap();
        assert_eq!(rows[0].threads, 4);
        assert_eq!(rows[0].v1_speedup, 2.5);
        assert_eq!(rows[0].v3_speedup, 2.8);
    }

    #[test]
    fn test_missing_column() {
        let err = from_csv("Threads,Puzzle\n1,Easy\n").unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn(ref c) if c == "Serial Time"));
    }

    #[test]
    fn test_unknown_puzzle() {
        let text = format!("{HEADER}1,Diabolical,0.1,1.0,1.0,1.0,3\n");
        let err = from_csv(&text).unwrap_err();
        match err {
            CsvError::TypeMismatch { row, column, value, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, "Puzzle");
                assert_eq!(value, "Diabolical");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_number() {
        let text = format!("{HEADER}1,Easy,0.1,fast,1.0,1.0,3\n");
        let err = from_csv(&text).unwrap_err();
        assert!(err.to_string().contains("'V1 Speedup'"));
    }

    #[test]
    fn test_header_only() {
        assert!(from_csv(HEADER).unwrap().is_empty());
    }
}
