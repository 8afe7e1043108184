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

//! Error types for chart rendering.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Chart rendering errors.
#[derive(Debug, Error)]
pub enum ChartError {
    /// No rows to plot.
    #[error("No chart data: the CSV has no rows")]
    NoData,

    /// The bundled font could not be loaded.
    #[error("Font error: cannot load font family '{0}'")]
    Font(String),

    /// The drawing backend failed.
    #[error("Drawing error: {0}")]
    Drawing(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Drawing(err.to_string())
    }
}

/// Result type for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ChartError::NoData.to_string(),
            "No chart data: the CSV has no rows"
        );
        assert_eq!(
            ChartError::Drawing("backend closed".to_string()).to_string(),
            "Drawing error: backend closed"
        );
        assert_eq!(
            ChartError::Font("sans-serif".to_string()).to_string(),
            "Font error: cannot load font family 'sans-serif'"
        );
    }

    #[test]
    fn test_from_drawing_area_error() {
        let err: ChartError = DrawingAreaErrorKind::<std::io::Error>::LayoutError.into();
        assert!(matches!(err, ChartError::Drawing(_)));
    }
}
