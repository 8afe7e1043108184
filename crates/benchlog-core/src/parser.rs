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

//! Parse entry points: segment, extract, aggregate.

use crate::error::{LogError, LogResult};
use crate::extract::{Extraction, Extractor};
use crate::limits::Limits;
use crate::puzzle::PuzzleLabel;
use crate::record::ResultTable;
use crate::segment::{split_puzzles, split_sections};
use tracing::debug;

/// Parsing options.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Input limits.
    pub limits: Limits,
    /// Emit `trace!` events for every section, block and field lookup.
    pub trace: bool,
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchlog_core::ParseOptions;
    ///
    /// let opts = ParseOptions::builder()
    ///     .max_file_size(1024)
    ///     .trace(true)
    ///     .build();
    /// assert!(opts.trace);
    /// assert_eq!(opts.limits.max_file_size, 1024);
    /// ```
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    limits: Limits,
    trace: bool,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum input size in bytes (default: 64 MiB).
    pub fn max_file_size(mut self, bytes: usize) -> Self {
        self.limits.max_file_size = bytes;
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Enable or disable extraction tracing.
    pub fn trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Build the options.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
            trace: self.trace,
        }
    }
}

/// What the parser saw in one puzzle block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockReport {
    /// Puzzle the block belongs to.
    pub puzzle: PuzzleLabel,
    /// Length of the block text in bytes.
    pub len: usize,
    /// Fields extracted from the block.
    pub extraction: Extraction,
}

/// What the parser saw in one thread section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionReport {
    /// Thread count of the section.
    pub threads: u32,
    /// Puzzle blocks found, in puzzle order.
    pub blocks: Vec<BlockReport>,
}

/// Full parse outcome: the aggregated table plus per-section detail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    /// Aggregated records.
    pub table: ResultTable,
    /// Sections in log order.
    pub sections: Vec<SectionReport>,
}

/// Parse a log held in memory with default options.
///
/// # Examples
///
/// ```
/// use benchlog_core::{parse, PuzzleLabel};
///
/// let log = "=== 2 THREADS ===\nEasy Puzzle:\nBacktracks: 5\n";
/// let table = parse(log.as_bytes()).unwrap();
/// assert_eq!(table.get(2, PuzzleLabel::Easy).unwrap().backtracks, Some(5));
/// ```
///
/// # Errors
///
/// Returns [`LogError`] when the input exceeds the default size limit or is
/// not UTF-8.
pub fn parse(input: &[u8]) -> LogResult<ResultTable> {
    parse_with_options(input, &ParseOptions::default()).map(|report| report.table)
}

/// Parse a log with explicit options, keeping per-section detail.
///
/// # Errors
///
/// Returns [`LogError::FileTooLarge`] when the input exceeds
/// `options.limits.max_file_size` and [`LogError::InvalidUtf8`] when it is
/// not UTF-8.
pub fn parse_with_options(input: &[u8], options: &ParseOptions) -> LogResult<ParseReport> {
    if input.len() > options.limits.max_file_size {
        return Err(LogError::FileTooLarge {
            actual: input.len(),
            max: options.limits.max_file_size,
        });
    }
    let text = std::str::from_utf8(input).map_err(|e| LogError::InvalidUtf8 {
        offset: e.valid_up_to(),
    })?;
    Ok(parse_text(text, options))
}

/// Parse log text. Never fails; content problems only drop fields.
pub fn parse_text(text: &str, options: &ParseOptions) -> ParseReport {
    let extractor = Extractor::new(options.trace);
    let mut report = ParseReport::default();

    for section in split_sections(text) {
        let blocks: Vec<BlockReport> = split_puzzles(section.text)
            .into_iter()
            .map(|block| BlockReport {
                puzzle: block.puzzle,
                len: block.text.len(),
                extraction: extractor.extract(block.text),
            })
            .collect();

        for block in &blocks {
            report
                .table
                .insert_record(section.threads, block.puzzle, &block.extraction.record);
        }

        report.sections.push(SectionReport {
            threads: section.threads,
            blocks,
        });
    }

    debug!(
        sections = report.sections.len(),
        records = report.table.len(),
        "parsed benchmark log"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::UNDEFINED_SPEEDUP_FALLBACK;

    const SCENARIO: &str = "=== 2 THREADS ===\nEasy Puzzle:\n=== SERIAL VERSION ===\n\
Time taken: 0.002500 seconds\n=== PARALLEL V1 (Tasks) ===\nSpeedup: 1.20x\nBacktracks: 5\n";

    #[test]
    fn test_end_to_end_scenario() {
        let table = parse(SCENARIO.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        let r = table.get(2, PuzzleLabel::Easy).unwrap();
        assert_eq!(r.serial_time, Some(0.0025));
        assert_eq!(r.v1_speedup, Some(1.20));
        assert_eq!(r.v2_speedup, None);
        assert_eq!(r.v3_speedup, None);
        assert_eq!(r.backtracks, Some(5));
    }

    #[test]
    fn test_nan_speedup_end_to_end() {
        let log = SCENARIO.replace("1.20x", "-nan(ind)x");
        let table = parse(log.as_bytes()).unwrap();
        let r = table.get(2, PuzzleLabel::Easy).unwrap();
        assert_eq!(r.v1_speedup, Some(UNDEFINED_SPEEDUP_FALLBACK));
    }

    #[test]
    fn test_no_boundaries_is_empty_not_error() {
        let table = parse(b"Easy Puzzle:\nBacktracks: 5\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_block_without_fields_has_no_key_but_is_reported() {
        let options = ParseOptions::default();
        let report = parse_text("=== 1 THREAD ===\nMedium Puzzle:\nnothing here\n", &options);
        assert!(report.table.is_empty());
        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.sections[0].blocks.len(), 1);
        assert_eq!(report.sections[0].blocks[0].puzzle, PuzzleLabel::Medium);
    }

    #[test]
    fn test_size_limit() {
        let options = ParseOptions::builder().max_file_size(8).build();
        let err = parse_with_options(SCENARIO.as_bytes(), &options).unwrap_err();
        assert!(matches!(err, LogError::FileTooLarge { max: 8, .. }));
    }

    #[test]
    fn test_unlimited_limits() {
        let options = ParseOptions::builder()
            .max_file_size(8)
            .limits(Limits::unlimited())
            .build();
        let report = parse_with_options(SCENARIO.as_bytes(), &options).unwrap();
        assert_eq!(report.table.len(), 1);
    }

    #[test]
    fn test_invalid_utf8() {
        let err = parse(b"=== 1 THREAD ===\n\xff\xfe").unwrap_err();
        assert_eq!(err, LogError::InvalidUtf8 { offset: 17 });
    }

    #[test]
    fn test_trace_does_not_change_result() {
        let plain = parse_text(SCENARIO, &ParseOptions::default());
        let traced = parse_text(SCENARIO, &ParseOptions::builder().trace(true).build());
        assert_eq!(plain, traced);
    }
}
