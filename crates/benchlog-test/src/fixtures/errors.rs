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

//! Malformed log fixtures.
//!
//! None of these may make the parser fail; each only loses the affected
//! fields.

/// Malformed log samples as `(name, log_text)` pairs.
pub fn malformed_logs() -> Vec<(&'static str, String)> {
    vec![
        ("empty", String::new()),
        ("whitespace_only", "   \t\n  ".to_string()),
        ("boundary_only", "=== 4 THREADS ===\n".to_string()),
        ("header_without_body", "=== 2 THREADS ===\nEasy Puzzle:".to_string()),
        (
            "truncated_serial",
            "=== 2 THREADS ===\nEasy Puzzle:\n=== SERIAL VERSION ===\nTime taken: ".to_string(),
        ),
        (
            "double_dot_time",
            "=== 2 THREADS ===\nEasy Puzzle:\n=== SERIAL VERSION ===\nTime taken: 1.2.3 seconds\n"
                .to_string(),
        ),
        (
            "dots_only_speedup",
            "=== 2 THREADS ===\nMedium Puzzle:\n=== PARALLEL V2 (Speculative) ===\nSpeedup: ...x\n"
                .to_string(),
        ),
        (
            "overflowing_backtracks",
            "=== 8 THREADS ===\nAI Escargot:\nBacktracks: 123456789012345678901234567890\n"
                .to_string(),
        ),
        (
            "overflowing_threads",
            "=== 123456789012345 THREADS ===\nEasy Puzzle:\nBacktracks: 1\n".to_string(),
        ),
        (
            "unterminated_marker",
            "=== 2 THREADS ===\nPlatinum Blonde:\n=== SERIAL VERSION\nTime taken: 2.0 seconds\n"
                .to_string(),
        ),
        ("binary_noise", "=== 1 THREAD ===\n\u{0}\u{1}\u{7f}Easy Puzzle:\u{0}".to_string()),
    ]
}
