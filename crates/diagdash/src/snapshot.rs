//! Headless rendering of a single dashboard frame.
//!
//! Draws the dashboard into an off-screen buffer and returns it as plain
//! text, one line per terminal row with trailing blanks removed.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use crate::app::App;
use crate::state::DashboardState;

/// Render the dashboard once at `width` x `height` and return the buffer.
pub fn render_buffer(state: DashboardState, width: u16, height: u16) -> color_eyre::Result<Buffer> {
    let mut app = App::new(state);
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| app.draw(frame))?;
    Ok(terminal.backend().buffer().clone())
}

/// Plain text of a buffer, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::with_capacity((area.width as usize + 1) * area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::with_capacity(area.width as usize);
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Render the dashboard once and return it as text.
pub fn render_snapshot(state: DashboardState, width: u16, height: u16) -> color_eyre::Result<String> {
    tracing::debug!(width, height, "Rendering snapshot");
    let buffer = render_buffer(state, width, height)?;
    Ok(buffer_to_string(&buffer))
}
