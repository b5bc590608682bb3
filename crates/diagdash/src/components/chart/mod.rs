//! Dual-axis bar chart component.
//!
//! Accuracy is plotted against the left axis and dataset samples against the
//! right axis, two bars per disease. A legend sits under the plot and the
//! selected disease gets a tooltip.

mod bars;
mod legend;
mod tooltip;

pub use bars::{ChartGeometry, chart_lines};
pub use legend::legend_line;
pub use tooltip::{tooltip_area, tooltip_lines, tooltip_size};

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{Component, EventResult};
use crate::config::DashboardAction;
use crate::event::AppKeyEvent;
use crate::state::DashboardState;
use crate::util::styles::{FOCUS_COLOR, focused_block};

pub struct DualAxisChart;

impl DualAxisChart {
    fn render_tooltip(
        frame: &mut Frame,
        plot: Rect,
        geometry: &ChartGeometry,
        state: &DashboardState,
        index: usize,
    ) {
        let Some(lines) = tooltip_lines(&state.chart, index) else {
            return;
        };
        let area = tooltip_area(plot, geometry, index, tooltip_size(&lines));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(FOCUS_COLOR));
        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Component for DualAxisChart {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut DashboardState) -> EventResult {
        match state.keybindings.action_for(key) {
            Some(DashboardAction::NextCategory) => {
                state.select_next();
                EventResult::Handled
            }
            Some(DashboardAction::PrevCategory) => {
                state.select_prev();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let block = focused_block(" Model Performance ", state.selected.is_some());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [plot, legend] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let Some(geometry) = ChartGeometry::new(state.chart.len(), plot.width, plot.height) else {
            let msg = Paragraph::new("Area too small").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(msg, plot);
            return;
        };

        frame.render_widget(
            Paragraph::new(chart_lines(&state.chart, &geometry, state.selected)),
            plot,
        );
        frame.render_widget(Paragraph::new(legend_line()), legend);

        if let Some(index) = state.selected {
            Self::render_tooltip(frame, plot, &geometry, state, index);
        }
    }
}
