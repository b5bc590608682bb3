use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::DashboardState;
use crate::util::styles::{HEADER_COLOR, HELP_COLOR};
use diagdash_core::DASHBOARD_TITLE;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct Header;

impl Component for Header {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut DashboardState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let block = Block::default().borders(Borders::BOTTOM);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let title_text = format!(" {}", DASHBOARD_TITLE);
        let info = format!("{} models · {} ", state.records.len(), state.source.label());
        let title_width = title_text.chars().count() as u16;
        let info_width = info.chars().count() as u16;

        let title = Paragraph::new(Line::from(Span::styled(
            title_text,
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        )));

        // The title wins when both do not fit.
        if inner.width < title_width + 1 + info_width {
            frame.render_widget(title, inner);
            return;
        }

        let [title_area, info_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(info_width)])
                .spacing(1)
                .areas(inner);
        frame.render_widget(title, title_area);

        let info = Paragraph::new(Line::from(Span::styled(
            info,
            Style::default().fg(HELP_COLOR),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(info, info_area);
    }
}
