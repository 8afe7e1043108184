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

//! Puzzle labels and parallel strategies recorded by the benchmark harness.

use std::fmt;
use std::str::FromStr;

/// One of the four benchmark puzzles.
///
/// The declaration order is the output order used by every renderer, so
/// the derived `Ord` sorts `Easy < Medium < AiEscargot < Platinum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PuzzleLabel {
    /// Beginner puzzle.
    Easy,
    /// Intermediate puzzle.
    Medium,
    /// The "AI Escargot" hard puzzle.
    AiEscargot,
    /// The "Platinum Blonde" extremely hard puzzle.
    Platinum,
}

impl PuzzleLabel {
    /// All labels in output order.
    pub const ALL: [PuzzleLabel; 4] = [
        PuzzleLabel::Easy,
        PuzzleLabel::Medium,
        PuzzleLabel::AiEscargot,
        PuzzleLabel::Platinum,
    ];

    /// The two hardest puzzles, compared in the strategy chart.
    pub const HARD: [PuzzleLabel; 2] = [PuzzleLabel::AiEscargot, PuzzleLabel::Platinum];

    /// Name used in tables, CSV rows and charts.
    pub fn display_name(self) -> &'static str {
        match self {
            PuzzleLabel::Easy => "Easy",
            PuzzleLabel::Medium => "Medium",
            PuzzleLabel::AiEscargot => "AI Escargot",
            PuzzleLabel::Platinum => "Platinum",
        }
    }

    /// Literal header that opens this puzzle's block in a log section.
    pub fn log_header(self) -> &'static str {
        match self {
            PuzzleLabel::Easy => "Easy Puzzle:",
            PuzzleLabel::Medium => "Medium Puzzle:",
            PuzzleLabel::AiEscargot => "AI Escargot:",
            PuzzleLabel::Platinum => "Platinum Blonde:",
        }
    }
}

impl fmt::Display for PuzzleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment specifiers work in table rows
        f.pad(self.display_name())
    }
}

/// Error returned when a string is not a known puzzle display name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown puzzle label '{0}'")]
pub struct UnknownPuzzle(pub String);

impl FromStr for PuzzleLabel {
    type Err = UnknownPuzzle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PuzzleLabel::ALL
            .into_iter()
            .find(|label| label.display_name() == trimmed)
            .ok_or_else(|| UnknownPuzzle(trimmed.to_string()))
    }
}

/// Parallel solving strategy benchmarked against the serial run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strategy {
    /// OpenMP tasks with work stealing.
    V1,
    /// Speculative parallel for.
    V2,
    /// Adaptive hybrid.
    V3,
}

impl Strategy {
    /// All strategies in column order.
    pub const ALL: [Strategy; 3] = [Strategy::V1, Strategy::V2, Strategy::V3];

    /// Prefix of the labeled sub-section holding this strategy's stats.
    pub fn section_label(self) -> &'static str {
        match self {
            Strategy::V1 => "PARALLEL V1",
            Strategy::V2 => "PARALLEL V2",
            Strategy::V3 => "PARALLEL V3",
        }
    }

    /// Short tag, e.g. `V1`.
    pub fn tag(self) -> &'static str {
        match self {
            Strategy::V1 => "V1",
            Strategy::V2 => "V2",
            Strategy::V3 => "V3",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_order_follows_declaration() {
        let mut labels = vec![
            PuzzleLabel::Platinum,
            PuzzleLabel::Easy,
            PuzzleLabel::AiEscargot,
            PuzzleLabel::Medium,
        ];
        labels.sort();
        assert_eq!(labels, PuzzleLabel::ALL.to_vec());
    }

    #[test]
    fn test_display_name_round_trips_through_from_str() {
        for label in PuzzleLabel::ALL {
            assert_eq!(label.display_name().parse::<PuzzleLabel>(), Ok(label));
        }
    }

    #[test]
    fn test_log_header_is_not_display_name_for_platinum() {
        assert_eq!(PuzzleLabel::Platinum.log_header(), "Platinum Blonde:");
        assert!("Platinum Blonde".parse::<PuzzleLabel>().is_err());
    }

    #[test]
    fn test_display_honours_padding() {
        assert_eq!(format!("{:<8}|", PuzzleLabel::Easy), "Easy    |");
    }
}
