//! Chart building and rendering.
//!
//! This module turns the loaded dataset plus the user's X/Y/color/kind
//! selections into series of `(f64, f64)` points and renders them with one
//! of two backends: a braille chart drawn with ratatui's `Chart` widget, or
//! a half-block raster drawn with plotters. Both produce styled `Text`
//! suitable for the plot region.

mod braille;
mod palette;
mod raster;

pub use palette::{series_color, series_rgb, SERIES_PALETTE};

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::data::Dataset;
use crate::error::{Result, SiroccoError};

/// Plot region width in terminal cells.
pub const PLOT_WIDTH: u16 = 60;
/// Plot region height in terminal cells.
pub const PLOT_HEIGHT: u16 = 35;

/// Supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotKind {
    /// Individual points.
    #[default]
    Scatter,
    /// Points joined into a line.
    Line,
    /// Vertical bars anchored at zero.
    Bar,
}

impl PlotKind {
    /// Parse the plot-type field text. Empty input defaults to scatter;
    /// anything other than the three known kinds is a validation error.
    pub fn from_input(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "" | "scatter" => Ok(Self::Scatter),
            "line" => Ok(Self::Line),
            "bar" => Ok(Self::Bar),
            _ => Err(SiroccoError::unknown_plot_kind(input.trim())),
        }
    }

    /// Get the kind name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Scatter => "scatter",
            Self::Line => "line",
            Self::Bar => "bar",
        }
    }
}

/// Selectable plot rendering backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotBackend {
    /// ratatui `Chart` widget rendered offscreen (braille/dot markers,
    /// labeled axes, legend).
    #[default]
    Braille,
    /// plotters bitmap folded into half-block cells.
    HalfBlock,
}

impl PlotBackend {
    /// Get the next backend in the cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Braille => Self::HalfBlock,
            Self::HalfBlock => Self::Braille,
        }
    }

    /// Get the backend name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Braille => "braille",
            Self::HalfBlock => "half-block",
        }
    }
}

/// A fully resolved plot request: validated kind plus column selections.
#[derive(Debug, Clone)]
pub struct PlotRequest {
    /// X axis column name.
    pub x: String,
    /// Y axis column name.
    pub y: String,
    /// Optional color/group column name.
    pub color: Option<String>,
    /// Chart kind.
    pub kind: PlotKind,
}

/// One plotted series: a label for the legend (when grouped), the palette
/// index its color is drawn from, and the points themselves.
#[derive(Debug, Clone)]
pub struct Series {
    /// Legend label; `None` for the single ungrouped series.
    pub label: Option<String>,
    /// Palette index (wraps modulo the palette length when drawn).
    pub color_index: usize,
    /// (x, y) points in row order.
    pub points: Vec<(f64, f64)>,
}

/// Content of the plot display region.
#[derive(Debug, Clone, Default)]
pub enum PlotContent {
    /// Nothing plotted yet (or cleared).
    #[default]
    Empty,
    /// A successfully rendered chart.
    Chart(Text<'static>),
    /// A diagnostic trace shown in place of the chart.
    Error(Text<'static>),
}

impl PlotContent {
    /// True when the region shows a diagnostic trace.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Build plot series from the dataset and request.
///
/// Without a color column this is a single unlabeled series of all rows.
/// With one, rows are partitioned by the distinct values of that column
/// (first-appearance order) into one labeled series per group, palette
/// indices assigned by group order.
pub fn build_series(dataset: &Dataset, request: &PlotRequest) -> Result<Vec<Series>> {
    let xs = dataset.numeric_column(&request.x)?;
    let ys = dataset.numeric_column(&request.y)?;

    let series = match &request.color {
        None => vec![Series {
            label: None,
            color_index: 0,
            points: xs.into_iter().zip(ys).collect(),
        }],
        Some(color) => dataset
            .partition_indices(color)?
            .into_iter()
            .enumerate()
            .map(|(group, (value, indices))| Series {
                label: Some(value),
                color_index: group,
                points: indices.into_iter().map(|i| (xs[i], ys[i])).collect(),
            })
            .collect(),
    };

    Ok(series)
}

/// Render a plot request against the dataset with the chosen backend.
pub fn render(
    dataset: &Dataset,
    request: &PlotRequest,
    backend: PlotBackend,
) -> Result<Text<'static>> {
    let series = build_series(dataset, request)?;
    if series.iter().all(|s| s.points.is_empty()) {
        return Err(SiroccoError::EmptyPlot(format!(
            "no rows for x='{}', y='{}'",
            request.x, request.y
        )));
    }

    match backend {
        PlotBackend::Braille => braille::render_chart(&series, request),
        PlotBackend::HalfBlock => raster::render_chart(&series, request.kind),
    }
}

/// Format an error and its source chain as a diagnostic trace for the plot
/// region.
pub fn diagnostic_trace(err: &SiroccoError) -> Text<'static> {
    let header = Style::default()
        .fg(ratatui::style::Color::Rgb(251, 73, 52))
        .add_modifier(Modifier::BOLD);
    let body = Style::default().fg(ratatui::style::Color::Rgb(235, 219, 178));

    let mut lines = vec![
        Line::from(Span::styled("Plot failed", header)),
        Line::from(""),
        Line::from(Span::styled(err.to_string(), body)),
    ];

    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        lines.push(Line::from(Span::styled(
            format!("  caused by: {cause}"),
            body,
        )));
        source = cause.source();
    }

    Text::from(lines)
}

/// Common axis bounds for both backends.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bounds {
    pub(crate) x_min: f64,
    pub(crate) x_max: f64,
    pub(crate) y_min: f64,
    pub(crate) y_max: f64,
}

/// Compute axis bounds over all series. Bar charts draw from y = 0, so zero
/// is folded into the y range; degenerate (single-value) ranges are padded
/// so the backends always get a non-empty span.
pub(crate) fn compute_bounds(series: &[Series], kind: PlotKind) -> Bounds {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for s in series {
        for &(x, y) in &s.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    if kind == PlotKind::Bar {
        y_min = y_min.min(0.0);
        y_max = y_max.max(0.0);
    }

    if !(x_max > x_min) {
        x_min -= 0.5;
        x_max += 0.5;
    }
    if !(y_max > y_min) {
        y_min -= 0.5;
        y_max += 0.5;
    }

    Bounds {
        x_min,
        x_max,
        y_min,
        y_max,
    }
}
