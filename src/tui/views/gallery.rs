//! Badge gallery: unlocked badges, newest unlock first.

use ratatui::text::{Line, Span};

use super::{cursor_span, ViewContext};
use crate::core::badge::{BadgeCatalog, BadgeDefinition};
use crate::core::profile::{format_date, Profile, UnlockedBadge};
use crate::tui::theme;
use crate::tui::widgets::width::{display_width, pad_to_width, truncate_to_width};

const DATE_COLUMN: usize = 10;
const RARITY_COLUMN: usize = 9;

/// Unlocked badges resolved against the catalog, sorted by unlock date
/// descending. Badges unlocked on the same day keep newest-unlock-first order.
pub fn sorted_unlocks<'a>(
    profile: &'a Profile,
    catalog: &'a BadgeCatalog,
) -> Vec<(&'a UnlockedBadge, &'a BadgeDefinition)> {
    let mut rows: Vec<_> = profile
        .unlocked_badges()
        .values()
        .rev()
        .filter_map(|u| catalog.lookup(&u.badge_id).map(|b| (u, b)))
        .collect();
    // Stable sort over reversed insertion order.
    rows.sort_by(|a, b| b.0.date.cmp(&a.0.date));
    rows
}

pub fn lines(ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
    let rows = sorted_unlocks(ctx.profile, ctx.catalog);
    if rows.is_empty() {
        return vec![
            Line::from(Span::styled("No badges unlocked yet.", theme::muted())),
            Line::raw(""),
            Line::from(Span::styled(
                "  Pick one from \"Unlock a badge\" in the main menu.",
                theme::dim(),
            )),
        ];
    }

    let name_column = rows
        .iter()
        .map(|(_, b)| display_width(b.name))
        .max()
        .unwrap_or(0)
        .max("Badge".len());
    // cursor + date + name + rarity, two spaces between columns
    let fixed = 2 + DATE_COLUMN + 2 + name_column + 2 + RARITY_COLUMN + 2;
    let description_width = ctx.width.saturating_sub(fixed);

    let header = format!(
        "  {}  {}  {}  Description",
        pad_to_width("Date", DATE_COLUMN),
        pad_to_width("Badge", name_column),
        pad_to_width("Rarity", RARITY_COLUMN),
    );
    let mut lines = vec![
        Line::from(Span::styled(header, theme::heading())),
        Line::from(Span::styled("─".repeat(ctx.width), theme::dim())),
    ];

    for (i, (unlocked, badge)) in rows.iter().enumerate() {
        lines.push(Line::from(vec![
            cursor_span(i == ctx.cursor),
            Span::styled(format_date(unlocked.date), theme::muted()),
            Span::raw("  "),
            Span::styled(
                pad_to_width(badge.name, name_column),
                theme::rarity_style(badge.rarity),
            ),
            Span::raw("  "),
            Span::styled(
                pad_to_width(badge.rarity.label(), RARITY_COLUMN),
                theme::rarity_style(badge.rarity),
            ),
            Span::raw("  "),
            Span::raw(truncate_to_width(badge.description, description_width)),
        ]));
    }
    lines
}
