//! Tooltip for the selected category.

use diagdash_core::{ChartModel, SERIES};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::bars::ChartGeometry;
use crate::util::styles::hex_color;

/// Tooltip body: category name, then one line per series.
pub fn tooltip_lines(chart: &ChartModel, index: usize) -> Option<Vec<Line<'static>>> {
    let (title, entries) = chart.tooltip(index)?;

    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for ((name, value), series) in entries.into_iter().zip(SERIES) {
        lines.push(Line::from(Span::styled(
            format!("{name}: {value}"),
            Style::default().fg(hex_color(series.fill)),
        )));
    }
    Some(lines)
}

/// Bordered size needed to show `lines`.
pub fn tooltip_size(lines: &[Line]) -> (u16, u16) {
    let width = lines.iter().map(Line::width).max().unwrap_or(0) + 4;
    let height = lines.len() + 2;
    (width as u16, height as u16)
}

/// Place the tooltip beside the selected slot, flipping left when it would overflow.
pub fn tooltip_area(area: Rect, geometry: &ChartGeometry, index: usize, size: (u16, u16)) -> Rect {
    let width = size.0.min(area.width);
    let height = size.1.min(area.height);

    let slot_start = area.x + geometry.slot_x(index) as u16;
    let slot_end = slot_start + geometry.slot_width as u16;

    let x = if slot_end + width <= area.right() {
        slot_end
    } else {
        slot_start.saturating_sub(width).max(area.x)
    };
    let y = area.y + geometry.plot_top() as u16;
    let height = height.min(area.bottom().saturating_sub(y));

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagdash_core::prediction_metrics;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_tooltip_lines() {
        let chart = ChartModel::from_records(&prediction_metrics());
        let lines = tooltip_lines(&chart, 3).unwrap();
        let texts: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(
            texts,
            vec!["URTI", "Accuracy (%): 88.7", "Dataset Samples: 1000"]
        );
        assert!(tooltip_lines(&chart, 9).is_none());
    }

    #[test]
    fn test_tooltip_stays_inside_area() {
        let chart = ChartModel::from_records(&prediction_metrics());
        let area = Rect::new(2, 3, 100, 20);
        let geometry = ChartGeometry::new(chart.len(), area.width, area.height).unwrap();
        let lines = tooltip_lines(&chart, 0).unwrap();
        let size = tooltip_size(&lines);

        for index in 0..chart.len() {
            let rect = tooltip_area(area, &geometry, index, size);
            assert!(rect.x >= area.x && rect.right() <= area.right(), "{rect:?}");
            assert!(rect.y >= area.y && rect.bottom() <= area.bottom(), "{rect:?}");
        }

        // First slot opens to the right, last slot flips to the left.
        let first = tooltip_area(area, &geometry, 0, size);
        assert!(first.x >= area.x + (geometry.slot_x(0) + geometry.slot_width) as u16);
        let last = tooltip_area(area, &geometry, 4, size);
        assert!(last.right() <= area.x + geometry.slot_x(4) as u16);
    }
}
