//! Root layout: header row, content panel, status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// Brand + screen name (top row).
    pub header: Rect,
    /// Main content area.
    pub main: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        AppLayout {
            header: rows[0],
            main: rows[1],
            status: rows[2],
        }
    }
}

/// Horizontally centered panel no wider than `max_width`.
pub fn centered_panel(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// First visible line so that `cursor_line` stays inside `visible` rows.
pub fn scroll_offset(cursor_line: usize, visible: usize) -> usize {
    if visible == 0 {
        return cursor_line;
    }
    cursor_line.saturating_sub(visible - 1)
}
