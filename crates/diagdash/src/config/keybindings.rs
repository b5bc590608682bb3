//! Keybindings configuration and matching.
//!
//! Bindings are strings such as `"q"`, `"ctrl+c"` or `"left"` and can be
//! overridden in `~/.diagdash/keybindings.yaml`. Missing fields keep their defaults.

#[cfg(feature = "native")]
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::event::{AppKeyEvent, KeyCode};

/// What a bound key asks the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    Quit,
    NextCategory,
    PrevCategory,
    ScrollDown,
    ScrollUp,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub quit: Vec<String>,
    pub next_category: Vec<String>,
    pub prev_category: Vec<String>,
    pub scroll_down: Vec<String>,
    pub scroll_up: Vec<String>,
    pub clear: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            quit: vec!["q".into(), "ctrl+c".into()],
            next_category: vec!["l".into(), "right".into()],
            prev_category: vec!["h".into(), "left".into()],
            scroll_down: vec!["j".into(), "down".into()],
            scroll_up: vec!["k".into(), "up".into()],
            clear: vec!["esc".into()],
        }
    }
}

impl KeybindingsConfig {
    /// Convert an AppKeyEvent to our string format.
    ///
    /// Examples:
    /// - KeyCode::Char('a') with no modifiers -> "a"
    /// - KeyCode::Char('c') with ctrl -> "ctrl+c"
    /// - KeyCode::Left -> "left"
    pub fn app_key_to_string(key: &AppKeyEvent) -> String {
        let mut parts = Vec::new();

        if key.ctrl {
            parts.push("ctrl");
        }
        if key.alt {
            parts.push("alt");
        }

        let key_str = match &key.code {
            KeyCode::Char(c) => {
                if key.shift && c.is_uppercase() {
                    parts.push("shift");
                }
                c.to_lowercase().to_string()
            }
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pageup".to_string(),
            KeyCode::PageDown => "pagedown".to_string(),
            _ => return String::new(),
        };

        parts.push(&key_str);
        parts.join("+")
    }

    /// Check if an AppKeyEvent matches any of the configured bindings.
    pub fn matches(key: &AppKeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::app_key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    /// Resolve a key to an action, checking bindings in a fixed order.
    pub fn action_for(&self, key: &AppKeyEvent) -> Option<DashboardAction> {
        [
            (&self.quit, DashboardAction::Quit),
            (&self.next_category, DashboardAction::NextCategory),
            (&self.prev_category, DashboardAction::PrevCategory),
            (&self.scroll_down, DashboardAction::ScrollDown),
            (&self.scroll_up, DashboardAction::ScrollUp),
            (&self.clear, DashboardAction::Clear),
        ]
        .into_iter()
        .find(|(bindings, _)| Self::matches(key, bindings))
        .map(|(_, action)| action)
    }

    /// Short help text built from the first binding of each action.
    pub fn help_text(&self) -> String {
        let first = |bindings: &[String]| bindings.first().cloned().unwrap_or_default();
        format!(
            "{}/{}: select model | {}/{}: scroll cards | {}: clear | {}: quit",
            first(&self.prev_category),
            first(&self.next_category),
            first(&self.scroll_down),
            first(&self.scroll_up),
            first(&self.clear),
            first(&self.quit),
        )
    }

    #[cfg(feature = "native")]
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("keybindings.yaml")
    }

    /// Load keybindings from `data_dir`. A missing file gives the defaults.
    #[cfg(feature = "native")]
    pub fn load(data_dir: &Path) -> Result<Self, String> {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        serde_saphyr::from_str(&content)
            .map_err(|e| format!("malformed {}: {e}", path.display()))
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;

    #[test]
    fn test_key_to_string() {
        assert_eq!(
            KeybindingsConfig::app_key_to_string(&AppKeyEvent::plain(KeyCode::Char('q'))),
            "q"
        );
        assert_eq!(
            KeybindingsConfig::app_key_to_string(&AppKeyEvent::with_ctrl(KeyCode::Char('c'))),
            "ctrl+c"
        );
        assert_eq!(
            KeybindingsConfig::app_key_to_string(&AppKeyEvent::plain(KeyCode::Left)),
            "left"
        );
        assert_eq!(
            KeybindingsConfig::app_key_to_string(&AppKeyEvent::plain(KeyCode::F(5))),
            ""
        );
    }

    #[test]
    fn test_default_actions() {
        let config = KeybindingsConfig::default();
        let action = |key: AppKeyEvent| config.action_for(&key);

        assert_eq!(action(AppKeyEvent::plain(KeyCode::Char('q'))), Some(DashboardAction::Quit));
        assert_eq!(
            action(AppKeyEvent::with_ctrl(KeyCode::Char('c'))),
            Some(DashboardAction::Quit)
        );
        assert_eq!(
            action(AppKeyEvent::plain(KeyCode::Right)),
            Some(DashboardAction::NextCategory)
        );
        assert_eq!(
            action(AppKeyEvent::plain(KeyCode::Char('h'))),
            Some(DashboardAction::PrevCategory)
        );
        assert_eq!(
            action(AppKeyEvent::plain(KeyCode::Char('j'))),
            Some(DashboardAction::ScrollDown)
        );
        assert_eq!(action(AppKeyEvent::plain(KeyCode::Esc)), Some(DashboardAction::Clear));
        assert_eq!(action(AppKeyEvent::plain(KeyCode::Char('x'))), None);
        assert_eq!(action(AppKeyEvent::plain(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: KeybindingsConfig = serde_saphyr::from_str("quit: [\"x\"]\n").unwrap();
        assert_eq!(config.quit, vec!["x".to_string()]);
        assert_eq!(config.next_category, KeybindingsConfig::default().next_category);
    }

    #[test]
    fn test_load_without_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            KeybindingsConfig::load(dir.path()).unwrap(),
            KeybindingsConfig::default()
        );

        std::fs::write(KeybindingsConfig::path(dir.path()), "clear: [\"c\"]\n").unwrap();
        let loaded = KeybindingsConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.clear, vec!["c".to_string()]);
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(KeybindingsConfig::path(dir.path()), "quit: {a: 1}\n").unwrap();
        let err = KeybindingsConfig::load(dir.path()).unwrap_err();
        assert!(err.contains("keybindings.yaml"), "{err}");
    }

    #[test]
    fn test_help_text() {
        assert_eq!(
            KeybindingsConfig::default().help_text(),
            "h/l: select model | j/k: scroll cards | esc: clear | q: quit"
        );
    }
}
