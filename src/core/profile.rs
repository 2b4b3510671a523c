//! The single user's progress record: identity, attributes, unlocked badges
//! and the newest-first activity log.
//!
//! Attributes change only through badge bonuses, and the title changes only
//! when an Epic or Legendary badge is unlocked.

use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, info};

use super::badge::BadgeDefinition;

/// Date format used for every persisted and displayed date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Title held until an Epic or Legendary badge is unlocked.
pub const DEFAULT_TITLE: &str = "新手上路";

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error, Diagnostic)]
pub enum ProfileError {
    #[error("invalid date `{input}`: expected YYYY-MM-DD")]
    #[diagnostic(
        code(lifewappen::profile::invalid_date),
        help("dates are written as four-digit year, month, day, e.g. 1995-08-15")
    )]
    InvalidDateFormat { input: String },
}

pub type ProfileResult<T> = Result<T, ProfileError>;

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> ProfileResult<NaiveDate> {
    let invalid = || ProfileError::InvalidDateFormat {
        input: input.to_string(),
    };
    // chrono tolerates unpadded fields; the stored format does not.
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid());
    }
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
    {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ============================================================================
// Attributes
// ============================================================================

/// The fixed set of profile attributes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Health,
    Mood,
    Intellect,
    Charisma,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Health,
        Attribute::Mood,
        Attribute::Intellect,
        Attribute::Charisma,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Attribute::Health => "Health",
            Attribute::Mood => "Mood",
            Attribute::Intellect => "Intellect",
            Attribute::Charisma => "Charisma",
        }
    }

    pub fn baseline(self) -> i64 {
        match self {
            Attribute::Health => 60,
            Attribute::Mood => 65,
            Attribute::Intellect => 70,
            Attribute::Charisma => 68,
        }
    }
}

/// Baseline attribute map, keyed by label in display order.
pub fn baseline_attributes() -> IndexMap<String, i64> {
    Attribute::ALL
        .iter()
        .map(|a| (a.label().to_string(), a.baseline()))
        .collect()
}

// ============================================================================
// Activity Log
// ============================================================================

/// One activity log record. Styling is applied at render time only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub date: String,
    pub message: String,
    /// Set when the entry records a badge unlock.
    pub badge_id: Option<String>,
}

impl LogEntry {
    pub fn custom(date: NaiveDate, message: impl Into<String>) -> Self {
        Self {
            date: format_date(date),
            message: message.into(),
            badge_id: None,
        }
    }

    pub fn unlock(date: NaiveDate, badge: &BadgeDefinition) -> Self {
        Self {
            date: format_date(date),
            message: badge.unlock_message(),
            badge_id: Some(badge.id.to_string()),
        }
    }

    /// Split a persisted `[date] message` line. Lines without a date prefix
    /// keep their full text as the message.
    pub fn parse(line: &str) -> Self {
        if let Some(rest) = line.strip_prefix('[') {
            if let Some((date, message)) = rest.split_once("] ") {
                return Self {
                    date: date.to_string(),
                    message: message.to_string(),
                    badge_id: None,
                };
            }
        }
        Self {
            date: String::new(),
            message: line.to_string(),
            badge_id: None,
        }
    }

    /// Plain, unstyled text as persisted and displayed.
    pub fn plain_text(&self) -> String {
        if self.date.is_empty() {
            self.message.clone()
        } else {
            format!("[{}] {}", self.date, self.message)
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockedBadge {
    pub badge_id: String,
    pub date: NaiveDate,
}

/// Result of an unlock attempt. `applied` is false for a repeated unlock.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockOutcome {
    pub applied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    birth_date: NaiveDate,
    title: String,
    attributes: IndexMap<String, i64>,
    /// Insertion order is unlock order.
    unlocked: IndexMap<String, UnlockedBadge>,
    /// Newest first.
    log: Vec<LogEntry>,
}

impl Profile {
    /// Create a fresh profile with baseline attributes.
    pub fn create(name: impl Into<String>, birth_date: &str) -> ProfileResult<Self> {
        let birth_date = parse_date(birth_date)?;
        Ok(Self::with_birth_date(name, birth_date))
    }

    pub fn with_birth_date(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birth_date,
            title: DEFAULT_TITLE.to_string(),
            attributes: baseline_attributes(),
            unlocked: IndexMap::new(),
            log: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn attributes(&self) -> &IndexMap<String, i64> {
        &self.attributes
    }

    pub fn attribute(&self, attribute: Attribute) -> i64 {
        self.attributes.get(attribute.label()).copied().unwrap_or(0)
    }

    pub fn unlocked_badges(&self) -> &IndexMap<String, UnlockedBadge> {
        &self.unlocked
    }

    pub fn is_unlocked(&self, badge_id: &str) -> bool {
        self.unlocked.contains_key(badge_id)
    }

    pub fn activity_log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Whole days between the birth date and today.
    pub fn days_survived(&self) -> i64 {
        self.days_survived_at(today())
    }

    /// Whole days between the birth date and `today`. Negative for a future
    /// birth date.
    pub fn days_survived_at(&self, today: NaiveDate) -> i64 {
        (today - self.birth_date).num_days()
    }

    /// Unlock a badge on `date` (today when `None`).
    ///
    /// The first unlock wins: a repeated call for the same badge id changes
    /// nothing, whatever date it carries.
    pub fn unlock_badge(&mut self, badge: &BadgeDefinition, date: Option<NaiveDate>) -> UnlockOutcome {
        let date = date.unwrap_or_else(today);
        self.apply_unlock(badge, date, true)
    }

    /// Re-apply a persisted unlock while rebuilding a loaded profile. Bonuses
    /// and title are recomputed; the persisted log already holds the entry.
    pub(crate) fn restore_unlock(&mut self, badge: &BadgeDefinition, date: NaiveDate) -> UnlockOutcome {
        self.apply_unlock(badge, date, false)
    }

    fn apply_unlock(&mut self, badge: &BadgeDefinition, date: NaiveDate, record_log: bool) -> UnlockOutcome {
        if self.unlocked.contains_key(badge.id) {
            debug!(badge = badge.id, "badge already unlocked, ignoring");
            return UnlockOutcome { applied: false };
        }

        self.unlocked.insert(
            badge.id.to_string(),
            UnlockedBadge {
                badge_id: badge.id.to_string(),
                date,
            },
        );

        for (attr, delta) in badge.bonuses {
            // Unknown attribute names are ignored.
            if let Some(value) = self.attributes.get_mut(*attr) {
                *value += delta;
            }
        }

        if record_log {
            self.log.insert(0, LogEntry::unlock(date, badge));
            info!(badge = badge.id, date = %date, "badge unlocked");
        }

        if badge.rarity.grants_title() {
            self.title = badge.name.to_string();
        }

        UnlockOutcome { applied: true }
    }

    /// Prepend a dated free-text entry for today.
    pub fn add_custom_log_entry(&mut self, text: impl Into<String>) {
        self.add_custom_log_entry_on(today(), text);
    }

    pub fn add_custom_log_entry_on(&mut self, date: NaiveDate, text: impl Into<String>) {
        self.log.insert(0, LogEntry::custom(date, text));
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_activity_log(&mut self, log: Vec<LogEntry>) {
        self.log = log;
    }
}
