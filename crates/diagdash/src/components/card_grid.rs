//! Responsive grid of per-disease detail cards.

use super::{Component, EventResult};
use crate::config::DashboardAction;
use crate::event::AppKeyEvent;
use crate::state::DashboardState;
use crate::util::styles::{FOCUS_COLOR, GRID_COLOR, accuracy_color, hex_color};
use diagdash_core::{Card, GridBreakpoints};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct CardGrid {
    breakpoints: GridBreakpoints,
    // Layout from the last render, used by key handling
    columns: usize,
    heights: Vec<u16>,
    available: u16,
    max_scroll: usize,
}

impl Default for CardGrid {
    fn default() -> Self {
        Self::new(GridBreakpoints::default())
    }
}

impl CardGrid {
    pub fn new(breakpoints: GridBreakpoints) -> Self {
        Self {
            breakpoints,
            columns: 0,
            heights: Vec::new(),
            available: 0,
            max_scroll: 0,
        }
    }

    /// Scroll the grid so the selected card's row is on screen.
    ///
    /// Uses the layout from the last render; does nothing before the first one.
    pub fn reveal_selected(&self, state: &mut DashboardState) {
        let Some(index) = state.selected else {
            return;
        };
        if self.columns == 0 {
            return;
        }
        let scroll = state.card_scroll.min(self.max_scroll);
        state.card_scroll = scroll_to_reveal(&self.heights, self.available, scroll, index / self.columns)
            .min(self.max_scroll);
    }
}

/// Bordered height of a card.
fn card_height(card: &Card) -> u16 {
    card.rows.len() as u16 + 2
}

/// Height of each grid row: the tallest card in it.
pub fn row_heights(cards: &[Card], columns: usize) -> Vec<u16> {
    if columns == 0 {
        return Vec::new();
    }
    cards
        .chunks(columns)
        .map(|row| row.iter().map(card_height).max().unwrap_or(0))
        .collect()
}

/// First row index from which every remaining row fits in `available` lines.
///
/// At least one row always counts as visible, even when it is cut off.
pub fn max_scroll(heights: &[u16], available: u16) -> usize {
    let mut used = 0u16;
    let mut fit = 0;
    for &height in heights.iter().rev() {
        if fit > 0 && used + height > available {
            break;
        }
        used = used.saturating_add(height);
        fit += 1;
    }
    heights.len() - fit
}

/// Smallest change to `scroll` that puts `row` on screen.
pub fn scroll_to_reveal(heights: &[u16], available: u16, scroll: usize, row: usize) -> usize {
    if row < scroll {
        return row;
    }
    let mut scroll = scroll;
    let visible = |from: usize| heights[from..=row].iter().map(|&h| h as u32).sum::<u32>();
    while scroll < row && visible(scroll) > available as u32 {
        scroll += 1;
    }
    scroll
}

/// Label on the left, value on the right, padded to `width`.
fn card_row_line(label: &str, value: &str, value_style: Style, width: usize) -> Line<'static> {
    let gap = width
        .saturating_sub(label.chars().count() + value.chars().count())
        .max(1);
    Line::from(vec![
        Span::raw(label.to_string()),
        Span::raw(" ".repeat(gap)),
        Span::styled(value.to_string(), value_style.add_modifier(Modifier::BOLD)),
    ])
}

fn render_card(frame: &mut Frame, area: Rect, card: &Card, accuracy: f64, selected: bool) {
    let border_style = if selected {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default().fg(GRID_COLOR)
    };
    let title = Span::styled(
        format!(" {} ", card.title),
        Style::default()
            .fg(hex_color(card.accent))
            .add_modifier(Modifier::BOLD),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(title));

    let inner_width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = card
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            // Accuracy is always the first row.
            let style = if i == 0 {
                Style::default().fg(accuracy_color(accuracy))
            } else {
                Style::default()
            };
            card_row_line(row.label, &row.value, style, inner_width)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

impl Component for CardGrid {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut DashboardState) -> EventResult {
        match state.keybindings.action_for(key) {
            Some(DashboardAction::ScrollDown) => {
                state.scroll_cards_down(self.max_scroll);
                EventResult::Handled
            }
            Some(DashboardAction::ScrollUp) => {
                state.scroll_cards_up(self.max_scroll);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let columns = self.breakpoints.columns(area.width);
        let heights = row_heights(&state.cards, columns);
        self.max_scroll = max_scroll(&heights, area.height);
        let scroll = state.card_scroll.min(self.max_scroll);
        self.columns = columns;
        self.available = area.height;

        let mut y = area.y;
        for (row_idx, row) in state.cards.chunks(columns).enumerate().skip(scroll) {
            if y >= area.bottom() {
                break;
            }
            let height = heights[row_idx].min(area.bottom() - y);
            let row_area = Rect::new(area.x, y, area.width, height);
            let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                .spacing(1)
                .split(row_area);

            for (col, card) in row.iter().enumerate() {
                let index = row_idx * columns + col;
                let accuracy = state.records[index].accuracy;
                render_card(frame, cells[col], card, accuracy, state.selected == Some(index));
            }
            y += height;
        }
        self.heights = heights;
    }
}
