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

//! Field extraction from a single puzzle block.
//!
//! Serial time and speedups are searched only inside their own labeled
//! sub-section (see [`crate::segment::split_labeled`]), so a missing value
//! in one sub-section can never be satisfied by text from the next one.
//! Backtracks are searched across the whole block.

use crate::puzzle::Strategy;
use crate::record::RunRecord;
use crate::segment::find_labeled;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

/// Value stored for a speedup printed as a not-a-number or infinite token
/// (`nan`, `-nan(ind)`, `inf`, `-inf`, ...).
pub const UNDEFINED_SPEEDUP_FALLBACK: f64 = 0.0;

/// Label of the serial run's sub-section.
pub const SERIAL_SECTION: &str = "SERIAL VERSION";

static SERIAL_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Time taken:\s+([\d.]+)\s+seconds").expect("valid serial time pattern")
});

static SPEEDUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Speedup:\s+([\d.]+|[-+]?(?i:nan(?:\(ind\))?|inf(?:inity)?))x")
        .expect("valid speedup pattern")
});

static BACKTRACKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Backtracks:\s+(\d+)").expect("valid backtracks pattern"));

/// Result of extracting one puzzle block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Fields that were found.
    pub record: RunRecord,
    /// Whether the block has a `SERIAL VERSION` sub-section at all.
    pub has_serial_section: bool,
    /// Speedup tokens exactly as printed in the log.
    pub raw_speedups: Vec<(Strategy, String)>,
}

/// Extracts numeric fields from puzzle blocks.
///
/// With `trace` enabled every lookup emits a `trace!` event describing what
/// was found or missed, which is how the `inspect` command and `--trace`
/// flag observe the parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    trace: bool,
}

impl Extractor {
    /// Create an extractor.
    pub fn new(trace: bool) -> Self {
        Self { trace }
    }

    /// Whether lookups are traced.
    pub fn is_tracing(&self) -> bool {
        self.trace
    }

    /// Extract every field from a puzzle block.
    pub fn extract(&self, block: &str) -> Extraction {
        let mut out = Extraction::default();

        let serial = find_labeled(block, SERIAL_SECTION);
        out.has_serial_section = serial.is_some();
        out.record.serial_time = serial.and_then(|body| self.serial_time(body));

        for strategy in Strategy::ALL {
            let Some(body) = find_labeled(block, strategy.section_label()) else {
                if self.trace {
                    trace!(strategy = strategy.tag(), "strategy section not present");
                }
                continue;
            };
            if let Some((raw, value)) = self.speedup(body, strategy) {
                out.record.set_speedup(strategy, value);
                out.raw_speedups.push((strategy, raw));
            }
        }

        out.record.backtracks = self.backtracks(block);
        out
    }

    fn serial_time(&self, body: &str) -> Option<f64> {
        let token = SERIAL_TIME.captures(body)?.get(1)?.as_str();
        match token.parse::<f64>() {
            Ok(secs) => {
                if self.trace {
                    trace!(token, secs, "serial time");
                }
                Some(secs)
            }
            Err(e) => {
                debug!(token, error = %e, "unparseable serial time");
                None
            }
        }
    }

    fn speedup(&self, body: &str, strategy: Strategy) -> Option<(String, f64)> {
        let token = SPEEDUP.captures(body)?.get(1)?.as_str();
        let value = parse_speedup(token);
        match value {
            Some(v) if self.trace => trace!(strategy = strategy.tag(), token, value = v, "speedup"),
            Some(_) => {}
            None => debug!(strategy = strategy.tag(), token, "unparseable speedup"),
        }
        value.map(|v| (token.to_string(), v))
    }

    fn backtracks(&self, block: &str) -> Option<u64> {
        let token = BACKTRACKS.captures(block)?.get(1)?.as_str();
        match token.parse::<u64>() {
            Ok(n) => {
                if self.trace {
                    trace!(token, "backtracks");
                }
                Some(n)
            }
            Err(e) => {
                debug!(token, error = %e, "unparseable backtrack count");
                None
            }
        }
    }
}

/// Parse a speedup token, mapping not-a-number and infinity spellings to
/// [`UNDEFINED_SPEEDUP_FALLBACK`].
///
/// Returns `None` only for tokens that look numeric but are not, such as
/// `1.2.3`.
pub fn parse_speedup(token: &str) -> Option<f64> {
    let lower = token.to_ascii_lowercase();
    if lower.contains("nan") || lower.contains("inf") {
        return Some(UNDEFINED_SPEEDUP_FALLBACK);
    }
    token.parse::<f64>().ok().map(|v| {
        if v.is_finite() {
            v
        } else {
            UNDEFINED_SPEEDUP_FALLBACK
        }
    })
}
