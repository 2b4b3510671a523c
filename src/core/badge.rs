//! Badge catalog: the static, read-only set of unlockable achievements.
//!
//! The catalog is built once at startup and handed to every component by
//! reference. Ids are stable; entries are never removed once published, since
//! saved profiles refer to them by id.

use std::collections::HashMap;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("duplicate badge id in catalog: {0}")]
    #[diagnostic(
        code(lifewappen::catalog::duplicate_id),
        help("badge ids must be unique; give the new badge its own id")
    )]
    DuplicateId(String),
}

// ============================================================================
// Rarity
// ============================================================================

/// Ordinal badge classification. Epic and Legendary badges grant a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Whether unlocking a badge of this rarity replaces the profile title.
    pub fn grants_title(self) -> bool {
        matches!(self, Rarity::Epic | Rarity::Legendary)
    }
}

// ============================================================================
// Badge Definition
// ============================================================================

/// An immutable badge definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeDefinition {
    pub id: &'static str,
    /// Display name; may contain wide characters.
    pub name: &'static str,
    pub category: &'static str,
    pub rarity: Rarity,
    pub description: &'static str,
    /// Attribute label → signed delta applied once on unlock.
    pub bonuses: &'static [(&'static str, i64)],
}

impl BadgeDefinition {
    /// Log message recorded when this badge is unlocked.
    pub fn unlock_message(&self) -> String {
        format!("Earned the {} badge!", self.name)
    }

    /// Human-readable bonus summary, e.g. `Intellect +5, Charisma +3`.
    pub fn bonus_summary(&self) -> String {
        if self.bonuses.is_empty() {
            return "no bonus".to_string();
        }
        self.bonuses
            .iter()
            .map(|(attr, delta)| format!("{attr} {delta:+}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

const BUILTIN_BADGES: &[BadgeDefinition] = &[
    BadgeDefinition {
        id: "sunset_watcher",
        name: "日落观赏者",
        category: "Life Experience",
        rarity: Rarity::Common,
        description: "Quietly watched a complete sunset at the end of the day.",
        bonuses: &[("Mood", 1)],
    },
    BadgeDefinition {
        id: "home_chef",
        name: "自炊小当家",
        category: "Survival & Basics",
        rarity: Rarity::Rare,
        description: "Cooked a three-dish-and-soup dinner for yourself and others.",
        bonuses: &[("Health", 2), ("Charisma", 1)],
    },
    BadgeDefinition {
        id: "meeting_terminator",
        name: "会议终结者",
        category: "Career & Skills",
        rarity: Rarity::Epic,
        description: "Pulled an endless meeting back on track with one sentence.",
        bonuses: &[("Intellect", 5), ("Charisma", 3)],
    },
    BadgeDefinition {
        id: "first_paycheck",
        name: "第一桶金",
        category: "Career & Skills",
        rarity: Rarity::Rare,
        description: "Received your first salary or payment for your work.",
        bonuses: &[("Intellect", 2)],
    },
    BadgeDefinition {
        id: "romance_knight",
        name: "恋爱骑士",
        category: "Relationships",
        rarity: Rarity::Epic,
        description: "Did something hard but deeply meaningful for your partner.",
        bonuses: &[("Mood", 5), ("Charisma", 5)],
    },
    BadgeDefinition {
        id: "best_friend",
        name: "挚友认证",
        category: "Relationships",
        rarity: Rarity::Legendary,
        description: "Have a friend of ten years who always shows up when needed.",
        bonuses: &[("Mood", 10), ("Charisma", 2)],
    },
    BadgeDefinition {
        id: "comfort_zone_breaker",
        name: "舒适圈破坏者",
        category: "Challenge",
        rarity: Rarity::Epic,
        description: "Did the thing you have always feared or avoided.",
        bonuses: &[("Mood", 8), ("Intellect", 2)],
    },
    BadgeDefinition {
        id: "early_riser",
        name: "早起鸟",
        category: "Survival & Basics",
        rarity: Rarity::Common,
        description: "Got up before sunrise seven days in a row.",
        bonuses: &[("Health", 1)],
    },
    BadgeDefinition {
        id: "bookworm",
        name: "书虫",
        category: "Career & Skills",
        rarity: Rarity::Common,
        description: "Finished a book in a single sitting.",
        bonuses: &[],
    },
];

// ============================================================================
// Catalog
// ============================================================================

/// Read-only badge registry with declaration-order listing and id lookup.
#[derive(Debug, Clone)]
pub struct BadgeCatalog {
    badges: Vec<BadgeDefinition>,
    index: HashMap<&'static str, usize>,
}

impl BadgeCatalog {
    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        // Built-in ids are unique; covered by `test_builtin_ids_unique`.
        let badges = BUILTIN_BADGES.to_vec();
        let index = badges
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id, i))
            .collect();
        Self { badges, index }
    }

    /// Build a catalog from explicit definitions, rejecting repeated ids.
    pub fn from_definitions(badges: Vec<BadgeDefinition>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(badges.len());
        for (i, badge) in badges.iter().enumerate() {
            if index.insert(badge.id, i).is_some() {
                return Err(CatalogError::DuplicateId(badge.id.to_string()));
            }
        }
        Ok(Self { badges, index })
    }

    pub fn lookup(&self, id: &str) -> Option<&BadgeDefinition> {
        self.index.get(id).map(|&i| &self.badges[i])
    }

    /// All badges in declaration order.
    pub fn list_all(&self) -> &[BadgeDefinition] {
        &self.badges
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }

    /// Find the badge whose unlock log message equals `message`.
    pub fn find_by_unlock_message(&self, message: &str) -> Option<&BadgeDefinition> {
        self.badges.iter().find(|b| b.unlock_message() == message)
    }
}
