#[cfg(feature = "native")]
use std::io;

#[cfg(feature = "native")]
use crossterm::event::{self, Event, KeyEventKind};
#[cfg(feature = "native")]
use ratatui::DefaultTerminal;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{
    Component, EventResult, card_grid::CardGrid, chart::DualAxisChart, header::Header,
    status_bar::StatusBar,
};
use crate::config::DashboardAction;
use crate::event::AppKeyEvent;
use crate::state::DashboardState;

pub struct App {
    state: DashboardState,
    header: Header,
    chart: DualAxisChart,
    card_grid: CardGrid,
    status_bar: StatusBar,
}

impl App {
    pub fn new(state: DashboardState) -> Self {
        Self {
            state,
            header: Header,
            chart: DualAxisChart,
            card_grid: CardGrid::default(),
            status_bar: StatusBar,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn should_exit(&self) -> bool {
        self.state.exit
    }

    /// runs the application's main loop until the user quits
    #[cfg(feature = "native")]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(records = self.state.records.len(), "Dashboard started");
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: header, chart, cards, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),      // Header
                Constraint::Percentage(55), // Chart
                Constraint::Min(5),         // Cards
                Constraint::Length(2),      // Status bar
            ])
            .split(frame.area());

        self.header.render(frame, chunks[0], &self.state);
        self.chart.render(frame, chunks[1], &self.state);
        self.card_grid.render(frame, chunks[2], &self.state);
        self.status_bar.render(frame, chunks[3], &self.state);
    }

    #[cfg(feature = "native")]
    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event.into())
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: AppKeyEvent) {
        // Global key bindings
        match self.state.keybindings.action_for(&key) {
            Some(DashboardAction::Quit) => {
                self.state.exit = true;
                return;
            }
            Some(DashboardAction::Clear) => {
                self.state.clear_selection();
                return;
            }
            _ => {}
        }

        // Then the chart, then the cards
        let mut result = self.chart.handle_key(&key, &mut self.state);
        if result == EventResult::Handled {
            self.card_grid.reveal_selected(&mut self.state);
        } else {
            result = self.card_grid.handle_key(&key, &mut self.state);
        }

        if result == EventResult::Handled {
            tracing::debug!(
                selected = ?self.state.selected,
                card_scroll = self.state.card_scroll,
                "Dashboard state changed"
            );
        }
    }
}
