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

//! Bundled font for chart text.
//!
//! Plotters' `ab_glyph` backend only draws families registered at run time,
//! so DejaVu Sans is embedded and registered as `sans-serif` before the
//! first chart is drawn.

use crate::error::{ChartError, Result};
use once_cell::sync::Lazy;
use plotters::style::{register_font, FontStyle};
use tracing::debug;

/// Family name every chart text style uses.
pub const FONT_FAMILY: &str = "sans-serif";

static DEJAVU_SANS: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

static REGISTERED: Lazy<bool> = Lazy::new(|| {
    let ok = register_font(FONT_FAMILY, FontStyle::Normal, DEJAVU_SANS).is_ok();
    debug!(family = FONT_FAMILY, ok, "registered chart font");
    ok
});

/// Register the bundled font once per process.
///
/// # Errors
///
/// Returns [`ChartError::Font`] when the embedded font cannot be parsed.
pub fn ensure_registered() -> Result<()> {
    if *REGISTERED {
        Ok(())
    } else {
        Err(ChartError::Font(FONT_FAMILY.to_string()))
    }
}
