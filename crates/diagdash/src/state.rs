//! Presentation state for the dashboard.
//!
//! The records themselves never change after construction; everything here is
//! about what is highlighted and which part of the card grid is visible.

#[cfg(feature = "native")]
use std::path::Path;

use diagdash_core::{Card, ChartModel, MetricRecord, card_for};

use crate::config::KeybindingsConfig;

/// Where the displayed records came from, shown in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    BuiltIn,
    File(String),
}

impl DataSource {
    pub fn label(&self) -> String {
        match self {
            DataSource::BuiltIn => "built-in data".to_string(),
            DataSource::File(name) => name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub records: Vec<MetricRecord>,
    pub source: DataSource,
    pub chart: ChartModel,
    pub cards: Vec<Card>,
    pub keybindings: KeybindingsConfig,
    /// Category shown in the tooltip and highlighted in the grid
    pub selected: Option<usize>,
    /// First visible card row
    pub card_scroll: usize,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl DashboardState {
    pub fn new(records: Vec<MetricRecord>, source: DataSource) -> Self {
        let chart = ChartModel::from_records(&records);
        let cards = records.iter().map(card_for).collect();
        Self {
            records,
            source,
            chart,
            cards,
            keybindings: KeybindingsConfig::default(),
            selected: None,
            card_scroll: 0,
            error_message: None,
            exit: false,
        }
    }

    /// Apply keybindings from `data_dir`.
    ///
    /// A file that cannot be read or parsed keeps the current bindings and
    /// reports the problem in the status bar.
    #[cfg(feature = "native")]
    pub fn load_keybindings(&mut self, data_dir: &Path) {
        match KeybindingsConfig::load(data_dir) {
            Ok(keybindings) => self.keybindings = keybindings,
            Err(e) => self.set_error(format!("keybindings ignored, {e}")),
        }
    }

    pub fn select_next(&mut self) {
        let len = self.chart.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1) % len,
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        let len = self.chart.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(idx) => idx - 1,
        });
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.clear_error();
    }

    pub fn scroll_cards_down(&mut self, max_scroll: usize) {
        self.card_scroll = (self.card_scroll + 1).min(max_scroll);
    }

    /// Scroll up one row. An offset left over from a smaller terminal is
    /// pulled back within `max_scroll` first.
    pub fn scroll_cards_up(&mut self, max_scroll: usize) {
        self.card_scroll = self.card_scroll.min(max_scroll).saturating_sub(1);
    }

    pub fn set_error(&mut self, msg: String) {
        tracing::warn!(error = %msg, "Dashboard error");
        self.error_message = Some(msg);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagdash_core::prediction_metrics;

    fn state() -> DashboardState {
        DashboardState::new(prediction_metrics(), DataSource::BuiltIn)
    }

    #[test]
    fn test_derived_models_match_records() {
        let state = state();
        assert_eq!(state.chart.len(), 5);
        assert_eq!(state.cards.len(), 5);
    }

    #[test]
    fn test_select_next_wraps() {
        let mut state = state();
        state.select_next();
        assert_eq!(state.selected, Some(0));
        for _ in 0..4 {
            state.select_next();
        }
        assert_eq!(state.selected, Some(4));
        state.select_next();
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn test_select_prev_wraps() {
        let mut state = state();
        state.select_prev();
        assert_eq!(state.selected, Some(4));
        state.select_prev();
        assert_eq!(state.selected, Some(3));

        state.selected = Some(0);
        state.select_prev();
        assert_eq!(state.selected, Some(4));
    }

    #[test]
    fn test_clear_selection_clears_error() {
        let mut state = state();
        state.select_next();
        state.set_error("boom".into());
        state.clear_selection();
        assert_eq!(state.selected, None);
        assert_eq!(state.error_message, None);
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut state = state();
        state.scroll_cards_up(2);
        assert_eq!(state.card_scroll, 0);

        for _ in 0..10 {
            state.scroll_cards_down(2);
        }
        assert_eq!(state.card_scroll, 2);

        state.scroll_cards_up(2);
        assert_eq!(state.card_scroll, 1);
    }

    #[test]
    fn test_scroll_up_after_bound_shrinks() {
        let mut state = state();
        state.card_scroll = 4;
        state.scroll_cards_up(0);
        assert_eq!(state.card_scroll, 0);

        state.card_scroll = 4;
        state.scroll_cards_up(2);
        assert_eq!(state.card_scroll, 1);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_bad_keybindings_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(KeybindingsConfig::path(dir.path()), "quit: {a: 1}\n").unwrap();

        let mut state = state();
        state.load_keybindings(dir.path());
        assert_eq!(state.keybindings, KeybindingsConfig::default());
        let message = state.error_message.clone().unwrap();
        assert!(message.starts_with("keybindings ignored"), "{message}");

        std::fs::write(KeybindingsConfig::path(dir.path()), "quit: [\"x\"]\n").unwrap();
        let mut state = self::state();
        state.load_keybindings(dir.path());
        assert_eq!(state.keybindings.quit, vec!["x".to_string()]);
        assert_eq!(state.error_message, None);
    }

    #[test]
    fn test_source_label() {
        assert_eq!(DataSource::BuiltIn.label(), "built-in data");
        assert_eq!(DataSource::File("runs.yaml".into()).label(), "runs.yaml");
    }
}
