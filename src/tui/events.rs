use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which screen the menu loop is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    MainMenu,
    ProfileView,
    BadgeGallery,
    LogView,
    UnlockMenu,
}

impl Screen {
    pub fn label(self) -> &'static str {
        match self {
            Screen::MainMenu => "Main Menu",
            Screen::ProfileView => "Profile Card",
            Screen::BadgeGallery => "Badge Gallery",
            Screen::LogView => "Activity Log",
            Screen::UnlockMenu => "Unlock a Badge",
        }
    }
}

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuOption {
    ProfileCard,
    BadgeGallery,
    ActivityLog,
    UnlockBadge,
    SaveAndExit,
}

impl MainMenuOption {
    pub const ALL: [MainMenuOption; 5] = [
        MainMenuOption::ProfileCard,
        MainMenuOption::BadgeGallery,
        MainMenuOption::ActivityLog,
        MainMenuOption::UnlockBadge,
        MainMenuOption::SaveAndExit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainMenuOption::ProfileCard => "View profile card",
            MainMenuOption::BadgeGallery => "Badge gallery",
            MainMenuOption::ActivityLog => "Activity log",
            MainMenuOption::UnlockBadge => "Unlock a badge",
            MainMenuOption::SaveAndExit => "Save and exit",
        }
    }

    /// Screen this option navigates to; `None` for save-and-exit.
    pub fn target(self) -> Option<Screen> {
        match self {
            MainMenuOption::ProfileCard => Some(Screen::ProfileView),
            MainMenuOption::BadgeGallery => Some(Screen::BadgeGallery),
            MainMenuOption::ActivityLog => Some(Screen::LogView),
            MainMenuOption::UnlockBadge => Some(Screen::UnlockMenu),
            MainMenuOption::SaveAndExit => None,
        }
    }
}

/// Key input reduced to menu intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Up,
    Down,
    Confirm,
    Back,
    /// Leave immediately without saving (Ctrl+C).
    ForceQuit,
}

impl Input {
    /// Map a terminal event to a menu intent. Key releases and repeats are
    /// ignored.
    pub fn from_event(event: &Event) -> Option<Input> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Input::ForceQuit),
            (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => Some(Input::Up),
            (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => Some(Input::Down),
            (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Input::Confirm),
            (_, KeyCode::Esc)
            | (_, KeyCode::Backspace)
            | (_, KeyCode::Left)
            | (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Input::Back),
            _ => None,
        }
    }
}

/// Notification level for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A message shown in the status bar until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}
