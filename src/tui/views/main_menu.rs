use ratatui::text::{Line, Span};

use super::{cursor_span, ViewContext};
use crate::tui::events::MainMenuOption;
use crate::tui::theme;

pub fn lines(ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Welcome back, "),
            Span::styled(ctx.profile.name().to_string(), theme::emphasis()),
            Span::raw(". Current title: "),
            Span::styled(ctx.profile.title().to_string(), theme::title()),
        ]),
        Line::raw(""),
    ];

    for (i, option) in MainMenuOption::ALL.iter().enumerate() {
        let selected = i == ctx.cursor;
        let style = if selected { theme::highlight() } else { theme::muted() };
        lines.push(Line::from(vec![
            cursor_span(selected),
            Span::styled(option.label(), style),
        ]));
    }
    lines
}
