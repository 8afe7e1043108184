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

//! Benchmark log fixtures.
//!
//! - [`builders`]: fluent construction of harness-shaped logs
//! - [`logs`]: canned logs with known contents
//! - [`errors`]: malformed logs that must parse without failing

pub mod builders;
pub mod errors;
pub mod logs;

pub use logs::{full_run, nan_speedup, no_boundaries, out_of_order, partial, scenario, sentinels};

use crate::FixtureList;

/// Returns every canned log fixture.
pub fn all() -> FixtureList {
    vec![
        ("scenario", scenario),
        ("nan_speedup", nan_speedup),
        ("full_run", full_run),
        ("out_of_order", out_of_order),
        ("partial", partial),
        ("sentinels", sentinels),
        ("no_boundaries", no_boundaries),
    ]
}
