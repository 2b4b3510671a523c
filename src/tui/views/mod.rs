//! Read-only views of a profile. Every view is a pure function from the
//! profile (and catalog) to styled lines; the TUI wraps them in blocks and
//! [`crate::tui::plain`] turns them into printable text.

pub mod card;
pub mod gallery;
pub mod log;
pub mod main_menu;
pub mod unlock;

use chrono::NaiveDate;
use ratatui::text::{Line, Span};

use crate::config::DisplayConfig;
use crate::core::badge::BadgeCatalog;
use crate::core::profile::{LogEntry, Profile};
use crate::tui::events::{MainMenuOption, Screen};
use crate::tui::theme;

/// Lines emitted by list views before their first selectable row.
pub const LIST_HEADER_ROWS: usize = 2;

/// Everything a view needs to render.
pub struct ViewContext<'a> {
    pub profile: &'a Profile,
    pub catalog: &'a BadgeCatalog,
    pub display: &'a DisplayConfig,
    pub today: NaiveDate,
    /// Selected row of the current list (ignored by the card).
    pub cursor: usize,
    /// Columns available for content.
    pub width: usize,
}

/// Render `screen` as styled lines.
pub fn lines(screen: Screen, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
    match screen {
        Screen::MainMenu => main_menu::lines(ctx),
        Screen::ProfileView => card::lines(ctx),
        Screen::BadgeGallery => gallery::lines(ctx),
        Screen::LogView => log::lines(ctx),
        Screen::UnlockMenu => unlock::lines(ctx),
    }
}

/// Number of selectable rows on `screen`.
pub fn option_count(screen: Screen, profile: &Profile, catalog: &BadgeCatalog) -> usize {
    match screen {
        Screen::MainMenu => MainMenuOption::ALL.len(),
        Screen::ProfileView => 0,
        Screen::BadgeGallery => gallery::sorted_unlocks(profile, catalog).len(),
        Screen::LogView => profile.activity_log().len(),
        Screen::UnlockMenu => unlock::locked_badges(profile, catalog).len(),
    }
}

/// Line index of the selected row, for scrolling.
pub fn cursor_line(screen: Screen, cursor: usize) -> Option<usize> {
    match screen {
        Screen::ProfileView => None,
        Screen::MainMenu | Screen::BadgeGallery | Screen::LogView | Screen::UnlockMenu => {
            Some(LIST_HEADER_ROWS + cursor)
        }
    }
}

/// Selection marker for list rows.
pub(crate) fn cursor_span(selected: bool) -> Span<'static> {
    if selected {
        Span::styled("▸ ", theme::highlight())
    } else {
        Span::raw("  ")
    }
}

/// `[date] message` with the badge name colored by rarity when the entry
/// records an unlock.
pub fn log_entry_spans(entry: &LogEntry, catalog: &BadgeCatalog) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(4);
    if !entry.date.is_empty() {
        spans.push(Span::styled(format!("[{}] ", entry.date), theme::muted()));
    }

    let badge = entry.badge_id.as_deref().and_then(|id| catalog.lookup(id));
    match badge.and_then(|b| entry.message.split_once(b.name).map(|parts| (b, parts))) {
        Some((badge, (before, after))) => {
            spans.push(Span::raw(before.to_string()));
            spans.push(Span::styled(badge.name, theme::rarity_style(badge.rarity)));
            spans.push(Span::raw(after.to_string()));
        }
        None => spans.push(Span::raw(entry.message.clone())),
    }
    spans
}

/// Flatten a line to its text content.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::core::profile::LogEntry;

    #[test]
    fn test_log_entry_spans_color_badge_name() {
        let catalog = BadgeCatalog::builtin();
        let badge = catalog.lookup("best_friend").unwrap();
        let entry = LogEntry::unlock(date("2024-01-01"), badge);
        let spans = log_entry_spans(&entry, &catalog);
        let name = spans.iter().find(|s| s.content == badge.name).unwrap();
        assert_eq!(name.style, theme::rarity_style(badge.rarity));
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, entry.plain_text());
    }

    #[test]
    fn test_log_entry_spans_custom() {
        let catalog = BadgeCatalog::builtin();
        let entry = LogEntry::custom(date("2024-01-01"), "hello");
        let spans = log_entry_spans(&entry, &catalog);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].content, "hello");
    }

    #[test]
    fn test_option_counts() {
        let catalog = BadgeCatalog::builtin();
        let p = sample_profile(&catalog);
        assert_eq!(option_count(Screen::MainMenu, &p, &catalog), 5);
        assert_eq!(option_count(Screen::ProfileView, &p, &catalog), 0);
        assert_eq!(option_count(Screen::BadgeGallery, &p, &catalog), 3);
        assert_eq!(option_count(Screen::LogView, &p, &catalog), 4);
        assert_eq!(option_count(Screen::UnlockMenu, &p, &catalog), catalog.len() - 3);
    }

    #[test]
    fn test_cursor_line() {
        assert_eq!(cursor_line(Screen::ProfileView, 3), None);
        assert_eq!(cursor_line(Screen::LogView, 0), Some(LIST_HEADER_ROWS));
    }
}
