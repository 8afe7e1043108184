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

//! Drawing the 2×2 performance chart with `plotters`.

use crate::data::ChartData;
use crate::error::Result;
use crate::font::{self, FONT_FAMILY};
use benchlog_core::{PuzzleLabel, Strategy};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::debug;

/// Chart figure settings.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Image width in pixels (default: 1400).
    pub width: u32,
    /// Image height in pixels (default: 1000).
    pub height: u32,
    /// Figure title.
    pub title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 1000,
            title: "Sudoku Solver Performance Analysis".to_string(),
        }
    }
}

/// Image format, picked from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Vector output via the SVG backend.
    Svg,
    /// Raster output via the bitmap backend (PNG, JPEG, BMP ...).
    Bitmap,
}

impl ImageFormat {
    /// `.svg` (any case) selects [`ImageFormat::Svg`]; everything else is
    /// bitmap.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ImageFormat::Svg,
            _ => ImageFormat::Bitmap,
        }
    }
}

const LINE_COLORS: [RGBColor; 4] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
];

const BAR_WIDTH: f64 = 0.25;

/// Render `data` to `path`.
///
/// # Errors
///
/// Returns [`crate::ChartError::Font`] when the bundled font cannot be
/// loaded and [`crate::ChartError::Drawing`] when the backend cannot draw or
/// write the file.
pub fn render_chart(data: &ChartData, path: &Path, config: &ChartConfig) -> Result<()> {
    font::ensure_registered()?;
    let size = (config.width, config.height);
    let format = ImageFormat::from_path(path);
    debug!(?format, path = %path.display(), "rendering chart");
    match format {
        ImageFormat::Svg => {
            draw_figure(SVGBackend::new(path, size).into_drawing_area(), data, config)
        }
        ImageFormat::Bitmap => {
            draw_figure(BitMapBackend::new(path, size).into_drawing_area(), data, config)
        }
    }
}

fn draw_figure<DB>(
    root: DrawingArea<DB, Shift>,
    data: &ChartData,
    config: &ChartConfig,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let body = root.titled(&config.title, (FONT_FAMILY, 28))?;
    let panels = body.split_evenly((2, 2));

    draw_v1_lines(&panels[0], data)?;
    draw_strategy_bars(&panels[1], data)?;
    draw_backtracks(&panels[2], data)?;
    draw_heatmap(&panels[3], data)?;

    root.present()?;
    Ok(())
}

fn draw_v1_lines<DB>(area: &DrawingArea<DB, Shift>, data: &ChartData) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (min_threads, max_threads) = data.thread_range();
    let x_min = min_threads as f64 - 0.5;
    let x_max = max_threads as f64 + 0.5;
    let y_max = data
        .v1_lines
        .iter()
        .flat_map(|l| l.points.iter().map(|&(_, v)| v))
        .fold(1.0, f64::max)
        * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption("Speedup vs Thread Count (Parallel V1)", (FONT_FAMILY, 18))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Thread Count")
        .y_desc("Speedup (V1 - Tasks)")
        .x_label_formatter(&|x: &f64| integer_label(*x).map(|t| t.to_string()).unwrap_or_default())
        .draw()?;

    for (i, line) in data.v1_lines.iter().enumerate() {
        let color = LINE_COLORS[i % LINE_COLORS.len()];
        chart
            .draw_series(
                LineSeries::new(
                    line.points.iter().map(|&(t, v)| (t as f64, v)),
                    color.stroke_width(2),
                )
                .point_size(4),
            )?
            .label(line.puzzle.display_name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK.mix(0.3))
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;
    Ok(())
}

fn draw_strategy_bars<DB>(area: &DrawingArea<DB, Shift>, data: &ChartData) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let groups = data.strategy_means.len().max(1);
    let y_max = data
        .strategy_means
        .iter()
        .flat_map(|m| m.means)
        .fold(1.0, f64::max)
        * 1.1;
    let threads: Vec<u32> = data.strategy_means.iter().map(|m| m.threads).collect();

    let mut chart = ChartBuilder::on(area)
        .caption("Parallel Strategy Comparison (Hard Puzzles)", (FONT_FAMILY, 18))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(-0.5..(groups as f64 - 0.5), 0.0..y_max)?;

    let label = |x: &f64| {
        integer_label(*x)
            .and_then(|i| threads.get(i as usize))
            .map(|t| t.to_string())
            .unwrap_or_default()
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(groups)
        .x_desc("Thread Count")
        .y_desc("Average Speedup")
        .x_label_formatter(&label)
        .draw()?;

    for (j, strategy) in Strategy::ALL.into_iter().enumerate() {
        let color = LINE_COLORS[j];
        let offset = (j as f64 - 1.0) * BAR_WIDTH;
        chart
            .draw_series(data.strategy_means.iter().enumerate().map(|(i, m)| {
                let x = i as f64 + offset;
                Rectangle::new(
                    [(x - BAR_WIDTH / 2.0, 0.0), (x + BAR_WIDTH / 2.0, m.mean(strategy))],
                    color.filled(),
                )
            }))?
            .label(format!("Parallel {}", strategy))
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK.mix(0.3))
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;
    Ok(())
}

fn draw_backtracks<DB>(area: &DrawingArea<DB, Shift>, data: &ChartData) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    const BAR_COLORS: [RGBColor; 4] = [
        RGBColor(0, 128, 0),
        RGBColor(255, 215, 0),
        RGBColor(255, 165, 0),
        RGBColor(255, 0, 0),
    ];

    let bars = data.backtracks.len().max(1);
    let y_max = data.backtracks.iter().map(|&(_, b)| b).max().unwrap_or(0).max(1) as f64 * 1.15;
    let names: Vec<PuzzleLabel> = data.backtracks.iter().map(|&(p, _)| p).collect();

    let mut chart = ChartBuilder::on(area)
        .caption("Puzzle Difficulty (Backtrack Count)", (FONT_FAMILY, 18))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(65)
        .build_cartesian_2d(-0.5..(bars as f64 - 0.5), 0.0..y_max)?;

    let label = |x: &f64| {
        integer_label(*x)
            .and_then(|i| names.get(i as usize))
            .map(|p| p.display_name().to_string())
            .unwrap_or_default()
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars)
        .x_desc("Puzzle")
        .y_desc("Number of Backtracks")
        .x_label_formatter(&label)
        .draw()?;

    chart.draw_series(data.backtracks.iter().enumerate().map(|(i, &(_, b))| {
        let x = i as f64;
        Rectangle::new(
            [(x - 0.4, 0.0), (x + 0.4, b as f64)],
            BAR_COLORS[i % BAR_COLORS.len()].filled(),
        )
    }))?;

    let value_style = TextStyle::from((FONT_FAMILY, 14).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(data.backtracks.iter().enumerate().map(|(i, &(_, b))| {
        Text::new(b.to_string(), (i as f64, b as f64), value_style.clone())
    }))?;
    Ok(())
}

fn draw_heatmap<DB>(area: &DrawingArea<DB, Shift>, data: &ChartData) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let heat = &data.heatmap;
    let rows = heat.puzzles.len().max(1);
    let cols = heat.threads.len().max(1);
    let max = heat.max().unwrap_or(1.0).max(f64::EPSILON);

    let mut chart = ChartBuilder::on(area)
        .caption("Speedup Heatmap (Parallel V1)", (FONT_FAMILY, 18))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..(cols as f64 - 0.5), -0.5..(rows as f64 - 0.5))?;

    // Row 0 is drawn at the top.
    let y_of = |row: usize| (rows - 1 - row) as f64;
    let x_label = |x: &f64| {
        integer_label(*x)
            .and_then(|i| heat.threads.get(i as usize))
            .map(|t| t.to_string())
            .unwrap_or_default()
    };
    let y_label = |y: &f64| {
        integer_label(*y)
            .filter(|&i| (i as usize) < rows)
            .and_then(|i| heat.puzzles.get(rows - 1 - i as usize))
            .map(|p| p.display_name().to_string())
            .unwrap_or_default()
    };
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(cols)
        .y_labels(rows)
        .x_desc("Thread Count")
        .y_desc("Puzzle")
        .x_label_formatter(&x_label)
        .y_label_formatter(&y_label)
        .draw()?;

    let cells: Vec<(usize, usize, f64)> = heat
        .cells
        .iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, v)| v.map(|v| (r, c, v)))
        })
        .collect();

    chart.draw_series(cells.iter().map(|&(r, c, v)| {
        let (x, y) = (c as f64, y_of(r));
        Rectangle::new(
            [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
            heat_color(v / max).filled(),
        )
    }))?;

    let cell_style = TextStyle::from((FONT_FAMILY, 14).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(cells.iter().map(|&(r, c, v)| {
        Text::new(format!("{:.2}", v), (c as f64, y_of(r)), cell_style.clone())
    }))?;
    Ok(())
}

/// `Some(n)` when `x` is (close to) the non-negative integer `n`.
fn integer_label(x: f64) -> Option<u32> {
    let rounded = x.round();
    ((x - rounded).abs() < 1e-6 && rounded >= 0.0).then_some(rounded as u32)
}

/// Yellow-orange-red ramp for `t` in `[0, 1]`.
pub(crate) fn heat_color(t: f64) -> RGBColor {
    const STOPS: [(f64, (f64, f64, f64)); 3] = [
        (0.0, (255.0, 255.0, 204.0)),
        (0.5, (253.0, 141.0, 60.0)),
        (1.0, (189.0, 0.0, 38.0)),
    ];
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let (lo, hi) = if t <= STOPS[1].0 {
        (STOPS[0], STOPS[1])
    } else {
        (STOPS[1], STOPS[2])
    };
    let f = (t - lo.0) / (hi.0 - lo.0);
    let mix = |a: f64, b: f64| (a + (b - a) * f).round() as u8;
    RGBColor(
        mix(lo.1 .0, hi.1 .0),
        mix(lo.1 .1, hi.1 .1),
        mix(lo.1 .2, hi.1 .2),
    )
}
