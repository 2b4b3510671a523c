//! Profile card: identity, title, days survived, badge count, attribute bars
//! and the most recent log entries.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::{line_text, log_entry_spans, ViewContext};
use crate::tui::theme;
use crate::tui::widgets::bar::bar_spans;
use crate::tui::widgets::width::{line_width, pad_to_width, truncate_to_width};

pub const CARD_TITLE: &str = " LIFEWAPPEN";

/// Card content grouped into sections; callers draw a divider between them.
pub fn sections(ctx: &ViewContext<'_>) -> Vec<Vec<Line<'static>>> {
    vec![
        vec![Line::from(Span::styled(CARD_TITLE, theme::title()))],
        identity_section(ctx),
        attribute_section(ctx),
        activity_section(ctx),
    ]
}

/// Sections joined with a dim horizontal rule.
pub fn lines(ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
    let divider = Line::from(Span::styled("─".repeat(ctx.width), theme::dim()));
    let mut out = Vec::new();
    for (i, section) in sections(ctx).into_iter().enumerate() {
        if i > 0 {
            out.push(divider.clone());
        }
        out.extend(section);
    }
    out
}

fn identity_section(ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
    let profile = ctx.profile;
    let days = profile.days_survived_at(ctx.today);

    let id_line = justify(
        vec![Span::raw(format!("ID: {}", profile.name()))],
        vec![
            Span::raw("Title: "),
            Span::styled(profile.title().to_string(), theme::title()),
        ],
        ctx.width,
    );
    let stats_line = justify(
        vec![
            Span::raw("Alive for "),
            Span::styled(days.to_string(), theme::emphasis()),
            Span::raw(" days"),
        ],
        vec![Span::raw(format!(
            "{} badges unlocked",
            profile.unlocked_badges().len()
        ))],
        ctx.width,
    );
    vec![id_line, stats_line]
}

fn attribute_section(ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
    let attributes = ctx.profile.attributes();
    let label_width = attributes.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    let bar_width = usize::from(ctx.display.bar_width);

    let mut lines = vec![Line::from(Span::styled("Attributes:", theme::heading()))];
    for (label, &value) in attributes {
        let mut spans = vec![Span::raw(format!("  {}: [", pad_to_width(label, label_width)))];
        spans.extend(bar_spans(value, bar_width));
        spans.push(Span::raw("] "));
        spans.push(Span::styled(value.to_string(), theme::emphasis()));
        spans.push(Span::styled("/100", theme::muted()));
        lines.push(Line::from(spans));
    }
    lines
}

fn activity_section(ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled("Recent activity:", theme::heading()))];
    let recent = ctx
        .profile
        .activity_log()
        .iter()
        .take(ctx.display.recent_entries);

    let mut any = false;
    for entry in recent {
        any = true;
        let mut spans = vec![Span::raw("  ")];
        spans.extend(log_entry_spans(entry, ctx.catalog));
        let line = Line::from(spans);
        if line_width(&line) > ctx.width {
            // Overlong entries lose their styling rather than the frame.
            let text = truncate_to_width(&line_text(&line), ctx.width);
            lines.push(Line::from(text));
        } else {
            lines.push(line);
        }
    }
    if !any {
        lines.push(Line::from(Span::styled("  Nothing yet.", theme::dim())));
    }
    lines
}

/// Left and right groups separated by enough spaces to fill `width`; at
/// least one space when they do not fit.
fn justify(left: Vec<Span<'static>>, right: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let used = line_width(&Line::from(left.clone())) + line_width(&Line::from(right.clone()));
    let gap = width.saturating_sub(used).max(1);
    let mut spans = left;
    spans.push(Span::styled(" ".repeat(gap), Style::default()));
    spans.extend(right);
    Line::from(spans)
}
