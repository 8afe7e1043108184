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

//! Error types for log parsing.
//!
//! Log content never produces an error: missing or malformed fields are
//! simply omitted. Errors only arise from input that cannot be read as a log.

use thiserror::Error;

/// Errors raised before extraction starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    /// Input is larger than [`crate::Limits::max_file_size`].
    #[error("log is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        /// Size of the input in bytes.
        actual: usize,
        /// Configured maximum in bytes.
        max: usize,
    },

    /// Input is not valid UTF-8.
    #[error("log is not valid UTF-8 (first invalid byte at offset {offset})")]
    InvalidUtf8 {
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },
}

/// Result alias for log parsing.
pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_too_large_display() {
        let err = LogError::FileTooLarge { actual: 200, max: 100 };
        assert_eq!(
            err.to_string(),
            "log is too large (200 bytes). Maximum allowed: 100 bytes"
        );
    }

    #[test]
    fn test_invalid_utf8_display() {
        let err = LogError::InvalidUtf8 { offset: 7 };
        assert!(err.to_string().contains("offset 7"));
    }
}
