//! Common styling utilities for TUI components

use diagdash_core::{ACCURACY_AXIS, HexColor};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for the selected category and its card
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Axis lines, tick labels and grid lines
pub const AXIS_COLOR: Color = Color::Gray;

/// Dashed grid lines behind the bars
pub const GRID_COLOR: Color = Color::DarkGray;

/// Background behind the selected category, like a chart hover cursor
pub const CURSOR_COLOR: Color = Color::Rgb(48, 48, 48);

/// Top of the accuracy gradient
pub const POSITIVE_COLOR: Color = Color::Green;

/// Terminal color for a record or series color token.
pub fn hex_color(color: HexColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Create a block with a title that shows focused state via border color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Color an accuracy value by where it sits on the accuracy axis.
pub fn accuracy_color(accuracy: f64) -> Color {
    gradient_color(ACCURACY_AXIS.fraction(accuracy))
}

/// Get a gradient color based on a ratio (0.0 to 1.0).
///
/// Returns colors from red (0.0) through yellow to green (1.0).
pub fn gradient_color(ratio: f64) -> Color {
    match ratio {
        r if r < 0.25 => Color::Red,
        r if r < 0.5 => Color::Yellow,
        r if r < 0.75 => Color::LightYellow,
        _ => POSITIVE_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_block_has_title() {
        let block = focused_block("Test", true);
        assert!(format!("{:?}", block).contains("Test"));
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(
            hex_color(HexColor::from_u32(0x4C51BF)),
            Color::Rgb(0x4C, 0x51, 0xBF)
        );
    }

    #[test]
    fn test_gradient_color() {
        assert_eq!(gradient_color(0.0), Color::Red);
        assert_eq!(gradient_color(0.1), Color::Red);
        assert_eq!(gradient_color(0.4), Color::Yellow);
        assert_eq!(gradient_color(0.6), Color::LightYellow);
        assert_eq!(gradient_color(0.9), POSITIVE_COLOR);
    }

    #[test]
    fn test_accuracy_color() {
        assert_eq!(accuracy_color(94.2), Color::LightYellow);
        assert_eq!(accuracy_color(80.0), Color::Red);
        assert_eq!(accuracy_color(100.0), POSITIVE_COLOR);
    }
}
