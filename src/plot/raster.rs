//! Raster plot backend.
//!
//! Draws the chart with plotters into an in-memory RGB bitmap, sized two
//! pixels per terminal cell vertically, then folds each pair of pixel rows
//! into `▀` half-block cells (foreground = top pixel, background = bottom
//! pixel). No file is written and no font stack is needed: the raster chart
//! carries no text, the braille backend is the labeled one.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

use super::{compute_bounds, series_rgb, PlotKind, Series, PLOT_HEIGHT, PLOT_WIDTH};
use crate::error::{Result, SiroccoError};

/// Bitmap width in pixels (one pixel per cell column).
const RASTER_WIDTH: u32 = PLOT_WIDTH as u32;
/// Bitmap height in pixels (two pixels per cell row).
const RASTER_HEIGHT: u32 = PLOT_HEIGHT as u32 * 2;

/// Chart background, matching the dark theme.
const BACKGROUND: (u8, u8, u8) = (40, 40, 40);

/// Render series into half-block text at the fixed plot dimensions.
pub(super) fn render_chart(series: &[Series], kind: PlotKind) -> Result<Text<'static>> {
    let mut pixels = vec![0u8; (RASTER_WIDTH * RASTER_HEIGHT * 3) as usize];
    draw_bitmap(series, kind, &mut pixels)?;
    Ok(half_block_text(&pixels, RASTER_WIDTH, RASTER_HEIGHT))
}

fn draw_bitmap(series: &[Series], kind: PlotKind, pixels: &mut [u8]) -> Result<()> {
    use plotters::prelude::*;

    let render_err = |e: &dyn std::fmt::Display| SiroccoError::Render(e.to_string());

    let bounds = compute_bounds(series, kind);
    let point_count: usize = series.iter().map(|s| s.points.len()).sum();
    // Bar width scales with the data density so bars stay visible.
    let bar_half = (bounds.x_max - bounds.x_min) / (point_count.max(1) as f64) * 0.4;

    let root = BitMapBackend::with_buffer(pixels, (RASTER_WIDTH, RASTER_HEIGHT))
        .into_drawing_area();
    let (bg_r, bg_g, bg_b) = BACKGROUND;
    root.fill(&RGBColor(bg_r, bg_g, bg_b))
        .map_err(|e| render_err(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(1)
        .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)
        .map_err(|e| render_err(&e))?;

    for s in series {
        let (r, g, b) = series_rgb(s.color_index);
        let color = RGBColor(r, g, b);
        match kind {
            PlotKind::Line => {
                chart
                    .draw_series(LineSeries::new(s.points.iter().copied(), &color))
                    .map_err(|e| render_err(&e))?;
            }
            PlotKind::Scatter => {
                chart
                    .draw_series(
                        s.points
                            .iter()
                            .map(|&p| Circle::new(p, 1, color.filled())),
                    )
                    .map_err(|e| render_err(&e))?;
            }
            PlotKind::Bar => {
                chart
                    .draw_series(s.points.iter().map(|&(x, y)| {
                        Rectangle::new([(x - bar_half, 0.0), (x + bar_half, y)], color.filled())
                    }))
                    .map_err(|e| render_err(&e))?;
            }
        }
    }

    root.present().map_err(|e| render_err(&e))?;
    Ok(())
}

/// Fold an RGB bitmap into half-block text, two pixel rows per line, merging
/// runs of identical color pairs into single spans.
fn half_block_text(pixels: &[u8], width: u32, height: u32) -> Text<'static> {
    let mut lines = Vec::with_capacity((height / 2) as usize);

    for row in 0..height / 2 {
        let mut spans = Vec::new();
        let mut run_len = 0usize;
        let mut run_pair = ((0, 0, 0), (0, 0, 0));

        for x in 0..width {
            let pair = (
                pixel_at(pixels, width, x, row * 2),
                pixel_at(pixels, width, x, row * 2 + 1),
            );
            if run_len > 0 && pair != run_pair {
                spans.push(half_block_span(run_len, run_pair));
                run_len = 0;
            }
            run_pair = pair;
            run_len += 1;
        }
        if run_len > 0 {
            spans.push(half_block_span(run_len, run_pair));
        }
        lines.push(Line::from(spans));
    }

    Text::from(lines)
}

fn pixel_at(pixels: &[u8], width: u32, x: u32, y: u32) -> (u8, u8, u8) {
    let offset = ((y * width + x) * 3) as usize;
    (pixels[offset], pixels[offset + 1], pixels[offset + 2])
}

fn half_block_span(len: usize, (top, bottom): ((u8, u8, u8), (u8, u8, u8))) -> Span<'static> {
    Span::styled(
        "▀".repeat(len),
        Style::default()
            .fg(Color::Rgb(top.0, top.1, top.2))
            .bg(Color::Rgb(bottom.0, bottom.1, bottom.2)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series() -> Vec<Series> {
        vec![Series {
            label: None,
            color_index: 0,
            points: vec![(0.0, 1.0), (1.0, 3.0), (2.0, 2.0), (3.0, 4.0)],
        }]
    }

    #[test]
    fn renders_fixed_cell_dimensions() {
        for kind in [PlotKind::Scatter, PlotKind::Line, PlotKind::Bar] {
            let text = render_chart(&sample_series(), kind).unwrap();
            assert_eq!(text.height(), PLOT_HEIGHT as usize);
            for line in &text.lines {
                assert_eq!(line.width(), PLOT_WIDTH as usize);
            }
        }
    }

    #[test]
    fn line_chart_marks_series_pixels() {
        let text = render_chart(&sample_series(), PlotKind::Line).unwrap();
        let series_fg = {
            let (r, g, b) = series_rgb(0);
            Color::Rgb(r, g, b)
        };
        let hit = text.lines.iter().any(|line| {
            line.spans
                .iter()
                .any(|s| s.style.fg == Some(series_fg) || s.style.bg == Some(series_fg))
        });
        assert!(hit, "expected at least one cell in the series color");
    }

    #[test]
    fn half_block_fold_merges_uniform_rows() {
        let pixels = vec![0u8; 4 * 4 * 3];
        let text = half_block_text(&pixels, 4, 4);
        assert_eq!(text.height(), 2);
        assert_eq!(text.lines[0].spans.len(), 1);
        assert_eq!(text.lines[0].width(), 4);
    }
}
