//! Unlock menu: catalog badges the profile has not unlocked yet.

use ratatui::text::{Line, Span};

use super::{cursor_span, ViewContext};
use crate::core::badge::{BadgeCatalog, BadgeDefinition};
use crate::core::profile::Profile;
use crate::tui::theme;
use crate::tui::widgets::width::{display_width, pad_to_width};

/// Locked badges in catalog order.
pub fn locked_badges<'a>(profile: &Profile, catalog: &'a BadgeCatalog) -> Vec<&'a BadgeDefinition> {
    catalog
        .list_all()
        .iter()
        .filter(|b| !profile.is_unlocked(b.id))
        .collect()
}

pub fn lines(ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
    let locked = locked_badges(ctx.profile, ctx.catalog);
    if locked.is_empty() {
        return vec![
            Line::from(Span::styled("Every badge is unlocked. Well done!", theme::title())),
            Line::raw(""),
        ];
    }

    let name_column = locked.iter().map(|b| display_width(b.name)).max().unwrap_or(0);
    let mut lines = vec![
        Line::from(Span::styled(
            "Choose a badge to unlock (Enter), Esc to go back",
            theme::muted(),
        )),
        Line::raw(""),
    ];

    for (i, badge) in locked.iter().enumerate() {
        lines.push(Line::from(vec![
            cursor_span(i == ctx.cursor),
            Span::styled(pad_to_width(badge.name, name_column), theme::rarity_style(badge.rarity)),
            Span::raw("  "),
            Span::styled(pad_to_width(badge.rarity.label(), 9), theme::rarity_style(badge.rarity)),
            Span::raw("  "),
            Span::styled(pad_to_width(badge.category, 17), theme::muted()),
            Span::raw("  "),
            Span::styled(badge.bonus_summary(), theme::emphasis()),
        ]));
    }

    if let Some(selected) = locked.get(ctx.cursor) {
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(selected.description, theme::dim()),
        ]));
    }
    lines
}

/// Whole catalog in declaration order with an unlocked mark, for printing.
pub fn catalog_overview(profile: &Profile, catalog: &BadgeCatalog) -> Vec<Line<'static>> {
    let name_column = catalog
        .list_all()
        .iter()
        .map(|b| display_width(b.name))
        .max()
        .unwrap_or(0);
    let id_column = catalog.list_all().iter().map(|b| b.id.len()).max().unwrap_or(0);

    catalog
        .list_all()
        .iter()
        .map(|badge| {
            let mark = match profile.unlocked_badges().get(badge.id) {
                Some(_) => Span::styled("✓ ", theme::title()),
                None => Span::styled("· ", theme::dim()),
            };
            Line::from(vec![
                mark,
                Span::styled(pad_to_width(badge.id, id_column), theme::muted()),
                Span::raw("  "),
                Span::styled(pad_to_width(badge.name, name_column), theme::rarity_style(badge.rarity)),
                Span::raw("  "),
                Span::styled(pad_to_width(badge.rarity.label(), 9), theme::rarity_style(badge.rarity)),
                Span::raw("  "),
                Span::raw(badge.bonus_summary()),
            ])
        })
        .collect()
}
