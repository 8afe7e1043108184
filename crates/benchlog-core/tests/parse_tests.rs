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

//! Parsing tests against harness-shaped fixture logs.

use benchlog_core::{
    best_speedups, parse, parse_text, ParseOptions, PuzzleLabel, Strategy, TOP_SPEEDUPS,
    UNDEFINED_SPEEDUP_FALLBACK,
};
use benchlog_test::fixtures::builders::{LogBuilder, PuzzleRun, SectionBuilder, PLATINUM};
use benchlog_test::fixtures::{self, errors::malformed_logs, logs};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================================
// Full run
// =============================================================================

#[test]
fn test_full_run_has_every_key() {
    let table = parse(fixtures::full_run().as_bytes()).unwrap();
    assert_eq!(table.len(), 16);
    assert_eq!(
        table.thread_counts().collect::<Vec<_>>(),
        logs::FULL_RUN_THREADS.to_vec()
    );
    for threads in logs::FULL_RUN_THREADS {
        let puzzles: Vec<_> = table.puzzles(threads).map(|(p, _)| p).collect();
        assert_eq!(puzzles, PuzzleLabel::ALL.to_vec());
    }
}

#[test]
fn test_full_run_values() {
    let table = parse(fixtures::full_run().as_bytes()).unwrap();

    for (i, puzzle) in PuzzleLabel::ALL.into_iter().enumerate() {
        let r = table.get(1, puzzle).unwrap();
        assert!(approx(r.serial_time.unwrap(), logs::FULL_RUN_SERIAL[i]));
        assert_eq!(r.backtracks, Some(logs::FULL_RUN_BACKTRACKS[i]));
        for strategy in Strategy::ALL {
            assert_eq!(r.speedup(strategy), Some(1.0));
        }
    }

    let r = table.get(8, PuzzleLabel::Platinum).unwrap();
    assert_eq!(r.v1_speedup, Some(4.5));
    assert_eq!(r.v2_speedup, Some(3.1));
    assert_eq!(r.v3_speedup, Some(5.2));
}

#[test]
fn test_full_run_best_speedups() {
    let table = parse(fixtures::full_run().as_bytes()).unwrap();
    let top = best_speedups(&table, TOP_SPEEDUPS);
    assert_eq!(top.len(), 5);
    // All four puzzles tie at 5.20x with 8 threads; table order breaks the tie.
    let expected = [
        (8, PuzzleLabel::Easy, 5.2),
        (8, PuzzleLabel::Medium, 5.2),
        (8, PuzzleLabel::AiEscargot, 5.2),
        (8, PuzzleLabel::Platinum, 5.2),
        (4, PuzzleLabel::Easy, 2.8),
    ];
    for (best, (threads, puzzle, speedup)) in top.iter().zip(expected) {
        assert_eq!(best.threads, threads);
        assert_eq!(best.puzzle, puzzle);
        assert_eq!(best.speedup, speedup);
    }
}

// =============================================================================
// Tolerance
// =============================================================================

#[test]
fn test_out_of_order_headers() {
    let table = parse(fixtures::out_of_order().as_bytes()).unwrap();
    let keys: Vec<_> = table.iter().map(|(t, p, _)| (t, p)).collect();
    assert_eq!(
        keys,
        vec![
            (4, PuzzleLabel::Easy),
            (4, PuzzleLabel::Medium),
            (4, PuzzleLabel::Platinum),
        ]
    );
    assert_eq!(table.get(4, PuzzleLabel::Platinum).unwrap().v1_speedup, Some(3.0));
    assert_eq!(table.get(4, PuzzleLabel::Easy).unwrap().v1_speedup, Some(0.5));
    let medium = table.get(4, PuzzleLabel::Medium).unwrap();
    assert_eq!(medium.v1_speedup, None);
    assert_eq!(medium.v2_speedup, Some(2.0));
}

#[test]
fn test_partial_section() {
    let table = parse(fixtures::partial().as_bytes()).unwrap();

    let escargot = table.get(1, PuzzleLabel::AiEscargot).unwrap();
    assert_eq!(escargot.serial_time, None);
    assert_eq!(escargot.v1_speedup, None);
    assert_eq!(escargot.backtracks, Some(1500));

    let easy = table.get(1, PuzzleLabel::Easy).unwrap();
    assert_eq!(easy.serial_time, Some(0.0005));
    assert_eq!(easy.v1_speedup, None);
    assert_eq!(easy.backtracks, Some(2));
}

#[test]
fn test_sentinels_normalize_for_every_strategy() {
    let table = parse(fixtures::sentinels().as_bytes()).unwrap();
    let r = table.get(2, PuzzleLabel::Easy).unwrap();
    for strategy in Strategy::ALL {
        let value = r.speedup(strategy).expect("speedup present");
        assert!(!value.is_nan());
        assert_eq!(value, UNDEFINED_SPEEDUP_FALLBACK);
    }
}

#[test]
fn test_nan_scenario() {
    let table = parse(fixtures::nan_speedup().as_bytes()).unwrap();
    let r = table.get(2, PuzzleLabel::Easy).unwrap();
    assert_eq!(r.v1_speedup, Some(UNDEFINED_SPEEDUP_FALLBACK));
    assert_eq!(r.serial_time, Some(0.0025));
    assert_eq!(r.backtracks, Some(5));
}

#[test]
fn test_infinite_speedups_normalize() {
    let log = LogBuilder::new()
        .section(
            SectionBuilder::new(8).run(
                PuzzleRun::new(PLATINUM)
                    .serial(1.3725, 15203)
                    .parallel(1, 0.0, 0)
                    .parallel(2, 0.0, 0)
                    .speedup_token(1, "inf")
                    .speedup_token(2, "-inf"),
            ),
        )
        .build();
    let table = parse(log.as_bytes()).unwrap();
    let r = table.get(8, PuzzleLabel::Platinum).unwrap();
    assert_eq!(r.v1_speedup, Some(UNDEFINED_SPEEDUP_FALLBACK));
    assert_eq!(r.v2_speedup, Some(UNDEFINED_SPEEDUP_FALLBACK));
    assert_eq!(r.serial_time, Some(1.3725));
}

#[test]
fn test_no_boundaries_means_no_data() {
    let table = parse(fixtures::no_boundaries().as_bytes()).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_malformed_logs_never_fail() {
    for (name, log) in malformed_logs() {
        let result = parse(log.as_bytes());
        assert!(result.is_ok(), "{} failed: {:?}", name, result.err());
        for (_, _, record) in result.unwrap().iter() {
            for strategy in Strategy::ALL {
                assert!(!record.speedup(strategy).is_some_and(f64::is_nan), "{}", name);
            }
        }
    }
}

#[test]
fn test_unterminated_marker_is_not_a_section() {
    let log = malformed_logs()
        .into_iter()
        .find(|(name, _)| *name == "unterminated_marker")
        .map(|(_, log)| log)
        .unwrap();
    assert!(parse(log.as_bytes()).unwrap().is_empty());
}

// =============================================================================
// Report
// =============================================================================

#[test]
fn test_report_describes_blocks() {
    let report = parse_text(&fixtures::partial(), &ParseOptions::default());
    assert_eq!(report.sections.len(), 1);
    let section = &report.sections[0];
    assert_eq!(section.threads, 1);

    let puzzles: Vec<_> = section.blocks.iter().map(|b| b.puzzle).collect();
    assert_eq!(puzzles, vec![PuzzleLabel::Easy, PuzzleLabel::AiEscargot]);
    assert!(section.blocks[0].extraction.has_serial_section);
    assert!(!section.blocks[1].extraction.has_serial_section);
    assert!(section.blocks.iter().all(|b| b.len > 0));
}

#[test]
fn test_repeated_thread_section_merges_fields() {
    let log = "=== 2 THREADS ===\nEasy Puzzle:\n=== SERIAL VERSION ===\nTime taken: 1.0 seconds\n\
               === 2 THREADS ===\nEasy Puzzle:\nBacktracks: 4\n";
    let table = parse(log.as_bytes()).unwrap();
    let r = table.get(2, PuzzleLabel::Easy).unwrap();
    assert_eq!(r.serial_time, Some(1.0));
    assert_eq!(r.backtracks, Some(4));
}
