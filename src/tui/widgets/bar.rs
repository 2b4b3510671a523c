//! Proportional attribute bars.

use ratatui::style::Style;
use ratatui::text::Span;

use crate::tui::theme;

pub const FILLED: char = '█';
pub const EMPTY: char = '░';

/// Filled cells for `value` on a 0..=100 scale: `round(value / 100 * width)`,
/// clamped to `[0, width]`. Values above 100 fill the bar; the number itself
/// is never clamped.
pub fn filled_cells(value: i64, width: usize) -> usize {
    let cells = (value as f64 / 100.0 * width as f64).round();
    cells.clamp(0.0, width as f64) as usize
}

/// Styled bar spans: filled cells in the success color, the rest dim.
pub fn bar_spans(value: i64, width: usize) -> Vec<Span<'static>> {
    let filled = filled_cells(value, width);
    vec![
        Span::styled(
            FILLED.to_string().repeat(filled),
            Style::default().fg(theme::SUCCESS),
        ),
        Span::styled(EMPTY.to_string().repeat(width - filled), theme::dim()),
    ]
}
