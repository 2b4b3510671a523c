use std::io;

use chrono::NaiveDate;
use crossterm::event::{self, Event};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::{error, info};

use super::events::{Input, MainMenuOption, Notification, NotificationLevel, Screen};
use super::layout::{centered_panel, scroll_offset, AppLayout};
use super::theme;
use super::views::{self, card, unlock, ViewContext};
use crate::config::DisplayConfig;
use crate::core::badge::BadgeCatalog;
use crate::core::profile::{self, Profile};
use crate::core::storage::ProfileStore;

/// State of the interactive menu loop.
pub struct AppState<'a> {
    /// Whether the loop is still running.
    pub running: bool,
    /// Screen currently shown.
    pub screen: Screen,
    /// Selected row on the current screen.
    pub cursor: usize,
    pub profile: Profile,
    catalog: &'a BadgeCatalog,
    store: ProfileStore,
    display: DisplayConfig,
    /// Unsaved changes since load or the last save.
    pub dirty: bool,
    /// Shown in the status bar until the next key press.
    pub notification: Option<Notification>,
    today: NaiveDate,
}

impl<'a> AppState<'a> {
    pub fn new(
        profile: Profile,
        catalog: &'a BadgeCatalog,
        store: ProfileStore,
        display: DisplayConfig,
    ) -> Self {
        Self {
            running: true,
            screen: Screen::MainMenu,
            cursor: 0,
            profile,
            catalog,
            store,
            display,
            dirty: false,
            notification: None,
            today: profile::today(),
        }
    }

    /// Pin the date used for new unlocks and the day count.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    // ── Event loop ──────────────────────────────────────────────────────

    /// Render, block on the next terminal event, update; until quit.
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            let event = event::read()?;
            self.handle_event(&event);
        }
        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: &Event) {
        let Some(input) = Input::from_event(event) else {
            return;
        };
        self.notification = None;

        match input {
            Input::ForceQuit => {
                info!(dirty = self.dirty, "force quit");
                self.running = false;
            }
            Input::Up => self.move_cursor(false),
            Input::Down => self.move_cursor(true),
            Input::Back => match self.screen {
                Screen::MainMenu => {
                    info!(dirty = self.dirty, "quit without saving");
                    self.running = false;
                }
                _ => self.go_to(Screen::MainMenu),
            },
            Input::Confirm => self.confirm(),
        }
    }

    fn move_cursor(&mut self, down: bool) {
        let count = views::option_count(self.screen, &self.profile, self.catalog);
        if count == 0 {
            return;
        }
        self.cursor = if down {
            (self.cursor + 1) % count
        } else {
            (self.cursor + count - 1) % count
        };
    }

    fn go_to(&mut self, screen: Screen) {
        self.screen = screen;
        self.cursor = 0;
    }

    fn confirm(&mut self) {
        match self.screen {
            Screen::MainMenu => {
                let Some(option) = MainMenuOption::ALL.get(self.cursor).copied() else {
                    return;
                };
                match option.target() {
                    Some(screen) => self.go_to(screen),
                    None => self.save_and_exit(),
                }
            }
            Screen::UnlockMenu => self.unlock_selected(),
            Screen::ProfileView | Screen::BadgeGallery | Screen::LogView => {}
        }
    }

    fn save_and_exit(&mut self) {
        match self.store.save(&self.profile) {
            Ok(()) => {
                self.dirty = false;
                self.running = false;
            }
            Err(e) => {
                error!(error = %e, "save failed");
                self.notify(format!("Save failed: {e}"), NotificationLevel::Error);
            }
        }
    }

    fn unlock_selected(&mut self) {
        let locked = unlock::locked_badges(&self.profile, self.catalog);
        let Some(badge) = locked.get(self.cursor).copied() else {
            return;
        };
        if self.profile.unlock_badge(badge, Some(self.today)).applied {
            self.dirty = true;
            self.notify(badge.unlock_message(), NotificationLevel::Success);
        }
        self.go_to(Screen::MainMenu);
    }

    fn notify(&mut self, message: String, level: NotificationLevel) {
        self.notification = Some(Notification { message, level });
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let layout = AppLayout::compute(frame.area());
        self.render_header(frame, layout.header);
        self.render_content(frame, layout.main);
        self.render_status_bar(frame, layout.status);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(" LIFEWAPPEN ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(
                self.screen.label(),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        let panel = centered_panel(area, self.display.card_width);
        let title = match self.screen {
            Screen::ProfileView => card::CARD_TITLE.trim(),
            other => other.label(),
        };
        let block = theme::block_focused(title).title_alignment(Alignment::Center);
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        // One column of breathing room on each side, as on the printed card.
        let width = usize::from(inner.width.saturating_sub(2));
        let ctx = ViewContext {
            profile: &self.profile,
            catalog: self.catalog,
            display: &self.display,
            today: self.today,
            cursor: self.cursor,
            width,
        };
        let lines = views::lines(self.screen, &ctx);
        let scroll = views::cursor_line(self.screen, self.cursor)
            .map(|line| scroll_offset(line, usize::from(inner.height)))
            .unwrap_or(0);

        let body = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height,
        );
        frame.render_widget(
            Paragraph::new(lines).scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0)),
            body,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = match &self.notification {
            Some(n) => {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    Span::raw(n.message.clone()),
                ]
            }
            None => vec![
                Span::raw(" "),
                Span::styled("↑↓", theme::key_hint()),
                Span::raw(":move "),
                Span::styled("Enter", theme::key_hint()),
                Span::raw(":select "),
                Span::styled("Esc", theme::key_hint()),
                Span::raw(":back "),
                Span::styled("Ctrl+C", theme::key_hint()),
                Span::raw(":quit"),
            ],
        };
        if self.dirty {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled("unsaved", Style::default().fg(theme::WARNING)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::views::test_support::{date, sample_profile};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app<'a>(catalog: &'a BadgeCatalog, dir: &TempDir, profile: Profile) -> AppState<'a> {
        let store = ProfileStore::new(dir.path().join("profile.json"));
        AppState::new(profile, catalog, store, DisplayConfig::default()).with_today(date("2024-08-15"))
    }

    fn fresh() -> Profile {
        Profile::create("Alex", "1995-08-15").unwrap()
    }

    #[test]
    fn test_cursor_wraps() {
        let catalog = BadgeCatalog::builtin();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&catalog, &dir, fresh());
        app.handle_event(&key(KeyCode::Up));
        assert_eq!(app.cursor, MainMenuOption::ALL.len() - 1);
        app.handle_event(&key(KeyCode::Down));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_navigate_and_back() {
        let catalog = BadgeCatalog::builtin();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&catalog, &dir, fresh());
        app.handle_event(&key(KeyCode::Down));
        app.handle_event(&key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::BadgeGallery);
        assert_eq!(app.cursor, 0);
        // Empty gallery: moving is a no-op.
        app.handle_event(&key(KeyCode::Down));
        assert_eq!(app.cursor, 0);
        app.handle_event(&key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::MainMenu);
        assert!(app.running);
    }

    #[test]
    fn test_unlock_from_menu() {
        let catalog = BadgeCatalog::builtin();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&catalog, &dir, fresh());
        for _ in 0..3 {
            app.handle_event(&key(KeyCode::Down));
        }
        app.handle_event(&key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::UnlockMenu);
        // Second locked badge in catalog order.
        app.handle_event(&key(KeyCode::Down));
        app.handle_event(&key(KeyCode::Enter));

        assert_eq!(app.screen, Screen::MainMenu);
        assert!(app.dirty);
        assert!(app.profile.is_unlocked("home_chef"));
        assert_eq!(
            app.profile.unlocked_badges()["home_chef"].date,
            date("2024-08-15")
        );
        let note = app.notification.as_ref().unwrap();
        assert_eq!(note.level, NotificationLevel::Success);
        assert_eq!(note.message, "Earned the 自炊小当家 badge!");

        // Next key press clears the notification.
        app.handle_event(&key(KeyCode::Down));
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_save_and_exit_writes_file() {
        let catalog = BadgeCatalog::builtin();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&catalog, &dir, sample_profile(&catalog));
        app.dirty = true;
        app.handle_event(&key(KeyCode::Up));
        app.handle_event(&key(KeyCode::Enter));
        assert!(!app.running);
        assert!(!app.dirty);

        let loaded = ProfileStore::new(dir.path().join("profile.json"))
            .load(&catalog, "x", "2000-01-01")
            .unwrap();
        assert_eq!(loaded.unlocked_badges().len(), 3);
        assert_eq!(loaded.activity_log().len(), 4);
    }

    #[test]
    fn test_save_failure_keeps_running() {
        let catalog = BadgeCatalog::builtin();
        let dir = tempfile::tempdir().unwrap();
        // A directory where the save file should be makes the rename fail.
        let path = dir.path().join("profile.json");
        std::fs::create_dir(&path).unwrap();
        let store = ProfileStore::new(&path);
        let mut app = AppState::new(fresh(), &catalog, store, DisplayConfig::default());
        app.handle_event(&key(KeyCode::Up));
        app.handle_event(&key(KeyCode::Enter));
        assert!(app.running);
        assert_eq!(
            app.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
    }

    #[test]
    fn test_back_at_main_menu_quits_without_saving() {
        let catalog = BadgeCatalog::builtin();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&catalog, &dir, fresh());
        app.handle_event(&key(KeyCode::Esc));
        assert!(!app.running);
        assert!(!dir.path().join("profile.json").exists());
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        let catalog = BadgeCatalog::builtin();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&catalog, &dir, fresh());
        app.handle_event(&key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::ProfileView);
        app.handle_event(&Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(!app.running);
    }

    #[test]
    fn test_render_every_screen() {
        let catalog = BadgeCatalog::builtin();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&catalog, &dir, sample_profile(&catalog));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        for screen in [
            Screen::MainMenu,
            Screen::ProfileView,
            Screen::BadgeGallery,
            Screen::LogView,
            Screen::UnlockMenu,
        ] {
            app.screen = screen;
            app.cursor = 0;
            terminal.draw(|frame| app.render(frame)).unwrap();
            let buffer = terminal.backend().buffer().clone();
            let top: String = (0..buffer.area.width)
                .map(|x| buffer[(x, 0)].symbol().to_string())
                .collect();
            assert!(top.contains(screen.label()), "{screen:?}: {top}");
        }
    }
}
