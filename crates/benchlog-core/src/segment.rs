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

//! Log segmentation.
//!
//! Segmentation runs in two independent phases so a failure in one level
//! never hides data in another:
//!
//! 1. [`split_sections`] cuts the log at every `=== N THREAD(S) ===`
//!    boundary.
//! 2. [`split_puzzles`] locates the four puzzle blocks inside one section,
//!    and [`split_labeled`] cuts a puzzle block at its `=== LABEL ===`
//!    markers (`SERIAL VERSION`, `PARALLEL V1 ...`).
//!
//! All functions return borrowed slices of the input.

use crate::puzzle::PuzzleLabel;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{trace, warn};

static THREAD_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"=== (\d+) THREADS? ===").expect("valid thread boundary pattern"));

static LABEL_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"===[ \t]*([^=\r\n]+?)[ \t]*===").expect("valid label marker pattern"));

/// Text recorded under one thread-count boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// Thread count captured from the boundary.
    pub threads: u32,
    /// Text between this boundary and the next one (or end of input).
    pub text: &'a str,
}

/// One puzzle's block inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleBlock<'a> {
    /// Which puzzle the block belongs to.
    pub puzzle: PuzzleLabel,
    /// Text after the puzzle header up to the next puzzle header.
    pub text: &'a str,
}

/// A `=== LABEL ===` sub-section of a puzzle block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labeled<'a> {
    /// Marker text without the surrounding `===`.
    pub label: &'a str,
    /// Text after the marker up to the next marker.
    pub body: &'a str,
}

/// Split a log into per-thread-count sections.
///
/// Text before the first boundary is ignored. A log without any boundary
/// yields an empty vector. Boundaries whose count is zero or does not fit a
/// `u32` are skipped; their text is not attributed to any section.
pub fn split_sections(text: &str) -> Vec<Section<'_>> {
    let boundaries: Vec<_> = THREAD_BOUNDARY.captures_iter(text).collect();
    let mut sections = Vec::with_capacity(boundaries.len());

    for (i, caps) in boundaries.iter().enumerate() {
        let (Some(whole), Some(count)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let end = boundaries
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());

        let threads = match count.as_str().parse::<u32>() {
            Ok(0) | Err(_) => {
                warn!(boundary = whole.as_str(), "skipping section with invalid thread count");
                continue;
            }
            Ok(n) => n,
        };

        trace!(threads, len = end - whole.end(), "found thread section");
        sections.push(Section {
            threads,
            text: &text[whole.end()..end],
        });
    }

    sections
}

/// Find the block that follows `puzzle`'s header in a section.
///
/// The block runs to the start of the next puzzle header of any kind, or
/// to the end of the section. Only the first header occurrence counts.
pub fn find_puzzle_block(section: &str, puzzle: PuzzleLabel) -> Option<&str> {
    let header = puzzle.log_header();
    let start = section.find(header)? + header.len();
    let rest = &section[start..];

    let end = PuzzleLabel::ALL
        .iter()
        .filter_map(|other| rest.find(other.log_header()))
        .min()
        .unwrap_or(rest.len());

    Some(&rest[..end])
}

/// Locate every puzzle block in a section, in [`PuzzleLabel::ALL`] order.
pub fn split_puzzles(section: &str) -> Vec<PuzzleBlock<'_>> {
    PuzzleLabel::ALL
        .into_iter()
        .filter_map(|puzzle| {
            let block = find_puzzle_block(section, puzzle);
            if block.is_none() {
                trace!(puzzle = puzzle.display_name(), "puzzle header not present");
            }
            block.map(|text| PuzzleBlock { puzzle, text })
        })
        .collect()
}

/// Cut a puzzle block at its `=== LABEL ===` markers.
///
/// Text before the first marker is not part of any sub-section.
pub fn split_labeled(block: &str) -> Vec<Labeled<'_>> {
    let markers: Vec<_> = LABEL_MARKER.captures_iter(block).collect();

    markers
        .iter()
        .enumerate()
        .filter_map(|(i, caps)| {
            let whole = caps.get(0)?;
            let label = caps.get(1)?.as_str();
            let end = markers
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(block.len(), |m| m.start());
            Some(Labeled {
                label,
                body: &block[whole.end()..end],
            })
        })
        .collect()
}

/// Body of the first sub-section whose label starts with `prefix`.
///
/// The character after the prefix must not continue a word, so
/// `PARALLEL V1` does not match a `PARALLEL V12` marker.
pub fn find_labeled<'a>(block: &'a str, prefix: &str) -> Option<&'a str> {
    split_labeled(block)
        .into_iter()
        .find(|l| {
            l.label.strip_prefix(prefix).is_some_and(|rest| {
                !rest.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_')
            })
        })
        .map(|l| l.body)
}
