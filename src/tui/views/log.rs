//! Full activity log, newest first.

use ratatui::text::{Line, Span};

use super::{cursor_span, log_entry_spans, ViewContext};
use crate::tui::theme;

pub fn lines(ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
    let log = ctx.profile.activity_log();
    let summary = match log.len() {
        0 => "No activity recorded yet.".to_string(),
        1 => "1 entry".to_string(),
        n => format!("{n} entries, newest first"),
    };

    let mut lines = vec![
        Line::from(Span::styled(summary, theme::muted())),
        Line::raw(""),
    ];
    for (i, entry) in log.iter().enumerate() {
        let mut spans = vec![cursor_span(i == ctx.cursor)];
        spans.extend(log_entry_spans(entry, ctx.catalog));
        lines.push(Line::from(spans));
    }
    lines
}
