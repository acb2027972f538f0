//! Static badge catalogue - read-only reference data.
//!
//! Badge definitions are fixed at compile time; the database only records
//! which catalogue ids a user has earned. The `points` field is the display
//! value from the catalogue; the actual bonus granted on unlock is the flat
//! amount in [`crate::core::rewards::BADGE_BONUS`].

use serde::Serialize;

/// How hard a badge is to earn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Which aspect of the habit loop a badge rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum BadgeCategory {
    Streak,
    Savings,
    Consistency,
    Milestone,
    Special,
}

/// A single badge definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Stable catalogue id (stored per-user when earned)
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// What the user did to earn it
    pub description: &'static str,
    /// Emoji shown next to the badge
    pub emoji: &'static str,
    /// Catalogue grouping
    pub category: BadgeCategory,
    /// Human-readable unlock requirement
    pub requirement: &'static str,
    /// Display point value
    pub points: i64,
    /// Rarity tier
    pub rarity: Rarity,
}

/// The complete, versioned badge catalogue.
pub const CATALOGUE: &[Badge] = &[
    Badge {
        id: "first-save",
        name: "First Save",
        description: "Dismissed your first impulse purchase",
        emoji: "\u{1f4b0}",
        category: BadgeCategory::Milestone,
        requirement: "Dismiss 1 wishlist item",
        points: 50,
        rarity: Rarity::Common,
    },
    Badge {
        id: "3-day-streak",
        name: "3-Day Streak",
        description: "Three days without impulse purchases",
        emoji: "\u{1f525}",
        category: BadgeCategory::Streak,
        requirement: "3-day streak",
        points: 100,
        rarity: Rarity::Common,
    },
    Badge {
        id: "week-warrior",
        name: "Week Warrior",
        description: "A full week of mindful spending",
        emoji: "\u{1f3c6}",
        category: BadgeCategory::Streak,
        requirement: "7-day streak",
        points: 250,
        rarity: Rarity::Uncommon,
    },
    Badge {
        id: "budget-ninja",
        name: "Budget Ninja",
        description: "Stayed under budget for a month",
        emoji: "\u{1f977}",
        category: BadgeCategory::Savings,
        requirement: "Stay under monthly budget",
        points: 500,
        rarity: Rarity::Rare,
    },
    Badge {
        id: "saver-supreme",
        name: "Saver Supreme",
        description: "Saved $500 by dismissing impulses",
        emoji: "\u{1f451}",
        category: BadgeCategory::Savings,
        requirement: "Save $500 total",
        points: 1000,
        rarity: Rarity::Epic,
    },
];

/// Looks up a badge definition by catalogue id.
#[must_use]
pub fn find(badge_id: &str) -> Option<&'static Badge> {
    CATALOGUE.iter().find(|badge| badge.id == badge_id)
}
