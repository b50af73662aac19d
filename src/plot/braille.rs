//! Text-art plot backend.
//!
//! Renders ratatui's `Chart` widget into an offscreen buffer at the fixed
//! plot dimensions and converts the buffer into owned `Text`, so the chart
//! can live in the plot region like any other renderable.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, LegendPosition, Widget};

use super::{compute_bounds, series_color, PlotKind, PlotRequest, Series, PLOT_HEIGHT, PLOT_WIDTH};
use crate::error::Result;

/// Render series as a braille/dot chart with labeled axes and, when the
/// series are grouped, a legend.
pub(super) fn render_chart(series: &[Series], request: &PlotRequest) -> Result<Text<'static>> {
    let bounds = compute_bounds(series, request.kind);

    let graph_type = match request.kind {
        PlotKind::Line => GraphType::Line,
        PlotKind::Scatter => GraphType::Scatter,
        PlotKind::Bar => GraphType::Bar,
    };
    let marker = match request.kind {
        PlotKind::Line => symbols::Marker::Braille,
        PlotKind::Scatter => symbols::Marker::Dot,
        PlotKind::Bar => symbols::Marker::HalfBlock,
    };

    let datasets: Vec<Dataset<'_>> = series
        .iter()
        .map(|s| {
            let mut dataset = Dataset::default()
                .marker(marker)
                .graph_type(graph_type)
                .style(Style::default().fg(series_color(s.color_index)))
                .data(&s.points);
            if let Some(label) = &s.label {
                dataset = dataset.name(label.clone());
            }
            dataset
        })
        .collect();

    let x_labels = vec![
        Span::raw(format_axis_label(bounds.x_min)),
        Span::raw(format_axis_label((bounds.x_min + bounds.x_max) / 2.0)),
        Span::raw(format_axis_label(bounds.x_max)),
    ];
    let y_labels = vec![
        Span::raw(format_axis_label(bounds.y_min)),
        Span::raw(format_axis_label((bounds.y_min + bounds.y_max) / 2.0)),
        Span::raw(format_axis_label(bounds.y_max)),
    ];

    let x_axis = Axis::default()
        .title(request.x.clone())
        .bounds([bounds.x_min, bounds.x_max])
        .labels(x_labels);
    let y_axis = Axis::default()
        .title(request.y.clone())
        .bounds([bounds.y_min, bounds.y_max])
        .labels(y_labels);

    let legend = if series.iter().any(|s| s.label.is_some()) {
        Some(LegendPosition::TopRight)
    } else {
        None
    };

    let chart = Chart::new(datasets)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(legend);

    let area = Rect::new(0, 0, PLOT_WIDTH, PLOT_HEIGHT);
    let mut buf = Buffer::empty(area);
    chart.render(area, &mut buf);

    Ok(buffer_to_text(&buf))
}

/// Convert an offscreen buffer into owned text, merging runs of cells that
/// share a style into single spans.
fn buffer_to_text(buf: &Buffer) -> Text<'static> {
    let area = buf.area;
    let mut lines = Vec::with_capacity(area.height as usize);

    for y in area.top()..area.bottom() {
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_style = Style::default();

        for x in area.left()..area.right() {
            let cell = &buf[(x, y)];
            let style = cell.style();
            if style != run_style && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
            }
            run_style = style;
            run.push_str(cell.symbol());
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_style));
        }
        lines.push(Line::from(spans));
    }

    Text::from(lines)
}

fn format_axis_label(v: f64) -> String {
    if v.abs() >= 1e6 || (v.abs() < 1e-2 && v != 0.0) {
        format!("{:.2e}", v)
    } else {
        format!("{:.2}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_series(points: Vec<(f64, f64)>) -> Series {
        Series {
            label: Some("s1".to_string()),
            color_index: 0,
            points,
        }
    }

    #[test]
    fn renders_fixed_dimensions() {
        let series = vec![point_series(vec![(0.0, 1.0), (1.0, 2.0), (2.0, 1.5)])];
        let request = PlotRequest {
            x: "a".to_string(),
            y: "b".to_string(),
            color: None,
            kind: PlotKind::Scatter,
        };
        let text = render_chart(&series, &request).unwrap();
        assert_eq!(text.height(), PLOT_HEIGHT as usize);
        assert_eq!(text.width(), PLOT_WIDTH as usize);
    }

    #[test]
    fn axis_titles_appear_in_output() {
        let series = vec![point_series(vec![(0.0, 0.0), (10.0, 5.0)])];
        let request = PlotRequest {
            x: "xcol".to_string(),
            y: "ycol".to_string(),
            color: None,
            kind: PlotKind::Line,
        };
        let text = render_chart(&series, &request).unwrap();
        let rendered = text
            .lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(rendered.contains("xcol"));
        assert!(rendered.contains("ycol"));
    }

    #[test]
    fn buffer_round_trip_merges_uniform_rows() {
        let area = Rect::new(0, 0, 4, 2);
        let buf = Buffer::empty(area);
        let text = buffer_to_text(&buf);
        assert_eq!(text.height(), 2);
        assert_eq!(text.lines[0].spans.len(), 1);
        assert_eq!(text.lines[0].to_string(), "    ");
    }
}
