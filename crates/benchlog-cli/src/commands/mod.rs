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

//! CLI command implementations

mod analyze;
mod inspect;
mod plot;

pub use analyze::analyze;
pub use inspect::inspect;
pub use plot::{open_in_viewer, plot, PlotOptions};

use crate::error::CliError;
use benchlog_core::{parse_with_options, LogError, ParseOptions, ParseReport};
use std::fs;
use std::path::Path;
use tracing::info;

/// Log analyzed when no file is given.
pub const DEFAULT_INPUT: &str = "results/test_results.txt";

/// CSV written by `analyze` and read by `plot` by default.
pub const DEFAULT_CSV: &str = "results/performance_data.csv";

/// Chart image written by `plot` by default.
pub const DEFAULT_CHART: &str = "results/performance_graphs.png";

/// Read and parse a benchmark log.
///
/// # Errors
///
/// [`CliError::InputNotFound`] when `path` does not exist, [`CliError::Io`]
/// when it cannot be read and [`CliError::Log`] when it is too large or
/// not UTF-8.
pub fn read_log(path: &Path, options: &ParseOptions) -> Result<ParseReport, CliError> {
    if !path.exists() {
        return Err(CliError::InputNotFound(path.to_path_buf()));
    }
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    let actual = byte_count(metadata.len());
    if actual > options.limits.max_file_size {
        return Err(LogError::FileTooLarge {
            actual,
            max: options.limits.max_file_size,
        }
        .into());
    }

    let bytes = fs::read(path).map_err(|e| CliError::io_error(path, e))?;
    info!(path = %path.display(), bytes = bytes.len(), "read benchmark log");
    Ok(parse_with_options(&bytes, options)?)
}

/// File length as `usize`, saturating where `u64` does not fit.
fn byte_count(len: u64) -> usize {
    usize::try_from(len).unwrap_or(usize::MAX)
}

/// Write `content` to `path`, creating missing parent directories.
pub fn write_output(content: &str, path: &Path) -> Result<(), CliError> {
    ensure_parent_dir(path)?;
    fs::write(path, content).map_err(|e| CliError::io_error(path, e))
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<(), CliError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| CliError::io_error(dir, e))
        }
        _ => Ok(()),
    }
}
