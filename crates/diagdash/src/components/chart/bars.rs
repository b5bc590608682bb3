//! Dual-axis bar plot rendering.
//!
//! Produces one `Line` per terminal row: an axis-title row, the plot rows, the
//! baseline and the category labels. Bars are drawn with eighth-block characters
//! so heights resolve to 1/8 of a cell.

use diagdash_core::format::{format_tick, truncate_label};
use diagdash_core::{ChartModel, SERIES, TICK_INTERVALS};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::util::styles::{AXIS_COLOR, CURSOR_COLOR, GRID_COLOR, hex_color};

/// Block characters for sub-character precision (from empty to full)
const BIN_CHARS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Smallest plot that still shows a meaningful bar
const MIN_PLOT_ROWS: usize = 3;

/// Widest a single bar gets, however much room a category has
const MAX_BAR_WIDTH: usize = 6;

/// Rows outside the plot: axis titles, baseline, labels
const FRAME_ROWS: usize = 3;

/// Column and row positions shared by the plot, labels and tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub categories: usize,
    pub left_gutter: usize,
    pub right_gutter: usize,
    pub plot_width: usize,
    pub plot_rows: usize,
    pub slot_width: usize,
    pub bar_width: usize,
    left_ticks: Vec<String>,
    right_ticks: Vec<String>,
}

impl ChartGeometry {
    /// Lay out `categories` slots in a `width` x `height` area, or `None` if it does not fit.
    pub fn new(categories: usize, width: u16, height: u16) -> Option<Self> {
        let [accuracy, samples] = SERIES;
        let left_ticks: Vec<String> = accuracy
            .axis
            .ticks(TICK_INTERVALS)
            .into_iter()
            .map(format_tick)
            .collect();
        let right_ticks: Vec<String> = samples
            .axis
            .ticks(TICK_INTERVALS)
            .into_iter()
            .map(format_tick)
            .collect();

        let left_gutter = left_ticks.iter().map(String::len).max().unwrap_or(0) + 2;
        let right_gutter = right_ticks.iter().map(String::len).max().unwrap_or(0) + 2;

        let plot_width = (width as usize).checked_sub(left_gutter + right_gutter)?;
        let plot_rows = (height as usize).checked_sub(FRAME_ROWS)?;
        if categories == 0 || plot_rows < MIN_PLOT_ROWS {
            return None;
        }

        let slot_width = plot_width / categories;
        if slot_width < 3 {
            return None;
        }
        let bar_width = ((slot_width - 1) / 2).clamp(1, MAX_BAR_WIDTH);

        Some(Self {
            categories,
            left_gutter,
            right_gutter,
            plot_width,
            plot_rows,
            slot_width,
            bar_width,
            left_ticks,
            right_ticks,
        })
    }

    /// Total rows the chart occupies.
    pub fn height(&self) -> usize {
        self.plot_rows + FRAME_ROWS
    }

    /// Column where a category slot starts, relative to the chart area.
    pub fn slot_x(&self, index: usize) -> usize {
        self.left_gutter + index * self.slot_width
    }

    /// Column of the first cell of a series bar within a category.
    pub fn bar_x(&self, index: usize, series: usize) -> usize {
        self.slot_x(index) + self.bar_lead() + series * self.bar_width
    }

    /// Output row (0 = axis titles) of the first plot row.
    pub fn plot_top(&self) -> usize {
        1
    }

    /// Output row of the category labels.
    pub fn label_row(&self) -> usize {
        self.plot_rows + 2
    }

    fn bar_lead(&self) -> usize {
        (self.slot_width - 2 * self.bar_width) / 2
    }

    /// Plot row (0 = top, `plot_rows` = baseline) where a tick at `fraction` sits.
    fn tick_row(&self, fraction: f64) -> usize {
        ((1.0 - fraction) * self.plot_rows as f64).round() as usize
    }

    /// Left and right tick labels for a plot row, if a tick lands there.
    fn ticks_at(&self, row: usize) -> Option<(&str, &str)> {
        (0..=TICK_INTERVALS)
            .rev()
            .find(|&i| self.tick_row(i as f64 / TICK_INTERVALS as f64) == row)
            .map(|i| (self.left_ticks[i].as_str(), self.right_ticks[i].as_str()))
    }

    /// Which category and series a plot column belongs to.
    fn cell_at(&self, x: usize) -> (Option<usize>, Option<usize>) {
        let index = x / self.slot_width;
        if index >= self.categories {
            return (None, None);
        }
        let offset = x - index * self.slot_width;
        let lead = self.bar_lead();
        let series = if offset < lead {
            None
        } else {
            let bar = (offset - lead) / self.bar_width;
            (bar < SERIES.len()).then_some(bar)
        };
        (Some(index), series)
    }
}

/// Render the plot as text lines for the given geometry.
pub fn chart_lines(
    chart: &ChartModel,
    geometry: &ChartGeometry,
    selected: Option<usize>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(geometry.height());
    lines.push(axis_title_line(geometry));

    let heights: Vec<[usize; 2]> = chart
        .categories
        .iter()
        .map(|category| category.bar_eighths(geometry.plot_rows))
        .collect();

    for row in 0..geometry.plot_rows {
        lines.push(plot_line(geometry, &heights, row, selected));
    }

    lines.push(baseline_line(geometry));
    lines.push(label_line(chart, geometry, selected));
    lines
}

fn axis_style() -> Style {
    Style::default().fg(AXIS_COLOR)
}

fn axis_title_line(geometry: &ChartGeometry) -> Line<'static> {
    let [accuracy, samples] = SERIES;
    let width = geometry.left_gutter + geometry.plot_width + geometry.right_gutter;
    let half = width / 2;

    let left = truncate_label(accuracy.name, half);
    let right = truncate_label(samples.name, width - half);
    let gap = width.saturating_sub(left.chars().count() + right.chars().count());

    Line::from(vec![
        Span::styled(left, Style::default().fg(hex_color(accuracy.fill))),
        Span::raw(" ".repeat(gap)),
        Span::styled(right, Style::default().fg(hex_color(samples.fill))),
    ])
}

fn plot_line(
    geometry: &ChartGeometry,
    heights: &[[usize; 2]],
    row: usize,
    selected: Option<usize>,
) -> Line<'static> {
    let tick = geometry.ticks_at(row);
    let lw = geometry.left_gutter - 2;
    let rw = geometry.right_gutter - 2;

    let mut spans = Vec::with_capacity(geometry.plot_width + 2);
    spans.push(match tick {
        Some((label, _)) => Span::styled(format!("{label:>lw$} ┤"), axis_style()),
        None => Span::styled(format!("{:lw$} │", ""), axis_style()),
    });

    let row_base = (geometry.plot_rows - 1 - row) * 8;
    let row_top = row_base + 8;

    for x in 0..geometry.plot_width {
        let (category, series) = geometry.cell_at(x);
        let mut style = Style::default();
        if category.is_some() && category == selected {
            style = style.bg(CURSOR_COLOR);
        }

        let bar = category
            .zip(series)
            .map(|(index, series)| (heights[index][series], series));

        let span = match bar {
            Some((bar_h, series)) if bar_h > row_base => {
                let symbol = if bar_h >= row_top {
                    BIN_CHARS[8]
                } else {
                    BIN_CHARS[(bar_h - row_base).min(8)]
                };
                Span::styled(symbol, style.fg(hex_color(SERIES[series].fill)))
            }
            _ if tick.is_some() => Span::styled("┈", style.fg(GRID_COLOR)),
            _ => Span::styled(" ", style),
        };
        spans.push(span);
    }

    spans.push(match tick {
        Some((_, label)) => Span::styled(format!("├ {label:<rw$}"), axis_style()),
        None => Span::styled(format!("│ {:rw$}", ""), axis_style()),
    });

    Line::from(spans)
}

fn baseline_line(geometry: &ChartGeometry) -> Line<'static> {
    let lw = geometry.left_gutter - 2;
    let rw = geometry.right_gutter - 2;
    let (left, right) = geometry
        .ticks_at(geometry.plot_rows)
        .unwrap_or(("", ""));

    Line::from(vec![
        Span::styled(format!("{left:>lw$} ┼"), axis_style()),
        Span::styled("─".repeat(geometry.plot_width), axis_style()),
        Span::styled(format!("┼ {right:<rw$}"), axis_style()),
    ])
}

fn label_line(
    chart: &ChartModel,
    geometry: &ChartGeometry,
    selected: Option<usize>,
) -> Line<'static> {
    let mut spans = vec![Span::raw(" ".repeat(geometry.left_gutter))];
    let label_width = geometry.slot_width - 1;

    for (index, category) in chart.categories.iter().enumerate() {
        let label = truncate_label(&category.label, label_width);
        let len = label.chars().count();
        let lead = (geometry.slot_width - len) / 2;
        let trail = geometry.slot_width - len - lead;

        let mut style = Style::default().fg(hex_color(category.color));
        if selected == Some(index) {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }

        spans.push(Span::raw(" ".repeat(lead)));
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" ".repeat(trail)));
    }

    let used = geometry.slot_width * chart.categories.len();
    let rest = geometry.plot_width.saturating_sub(used) + geometry.right_gutter;
    spans.push(Span::raw(" ".repeat(rest)));

    Line::from(spans)
}
