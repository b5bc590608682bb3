//! Series legend shown under the plot.

use diagdash_core::SERIES;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::util::styles::{AXIS_COLOR, hex_color};

pub fn legend_line() -> Line<'static> {
    let mut spans = Vec::new();
    for (i, series) in SERIES.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled("■ ", Style::default().fg(hex_color(series.fill))));
        spans.push(Span::styled(series.name, Style::default().fg(AXIS_COLOR)));
    }
    Line::from(spans).centered()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_names_both_series() {
        let text: String = legend_line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "■ Accuracy (%)   ■ Dataset Samples");
    }
}
