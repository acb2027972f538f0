//! User profile entity - The per-user singleton holding stats and settings.
//!
//! Keyed by the external user id. Stats columns are owned by the domain
//! engine and never written directly by the API layer; settings columns are
//! mutated only by an explicit settings save. Initialized with defaults on
//! first access.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User profile database model - stats and settings in one row per user
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    /// External user id (from the identity provider)
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    /// When the profile was first created
    pub created_at: DateTimeUtc,

    // Stats - derived aggregates, mutated exclusively by the domain engine
    /// Consecutive dismissals since the last completed purchase
    pub current_streak: i32,
    /// Highest streak ever reached; monotonically non-decreasing
    pub longest_streak: i32,
    /// Lifetime points total, including level-up and badge bonuses
    pub total_points_earned: i64,
    /// Current level, always `total_points_earned / 300 + 1`
    pub current_level: i64,
    /// Sum of prices of all dismissed wishlist items
    pub total_saved: f64,
    /// Sum of all purchase amounts
    pub total_spent: f64,
    /// Running total of the ADHD-tax ledger
    pub adhd_tax_total: f64,

    // Settings - mutated only by explicit user save
    /// Price above which an item must go through cooldown
    pub impulse_threshold: f64,
    /// Cooldown duration in hours; one of 24, 48, or 72
    pub cooldown_hours: i32,
    /// Whether notifications are enabled
    pub notifications_enabled: bool,
    /// Optional monthly budget
    pub monthly_budget: Option<f64>,
    /// Display currency code (e.g. `"USD"`)
    pub currency: String,
    /// UI theme: `"light"`, `"dark"`, or `"auto"`
    pub theme: String,
    /// UI language code (e.g. `"en"`)
    pub language: String,
}

/// User profiles have no table-level relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Derived-aggregate view of a profile, as exposed over the API and to the
/// insight context builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// Consecutive dismissals since the last completed purchase
    pub current_streak: i32,
    /// Highest streak ever reached
    pub longest_streak: i32,
    /// Lifetime points total
    pub total_points_earned: i64,
    /// Current level
    pub current_level: i64,
    /// Total saved by dismissing items
    pub total_saved: f64,
    /// Total spent on purchases
    pub total_spent: f64,
    /// ADHD-tax running total
    pub adhd_tax_total: f64,
}

/// Settings view of a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Price above which an item must go through cooldown
    pub impulse_threshold: f64,
    /// Cooldown duration in hours
    pub cooldown_hours: i32,
    /// Whether notifications are enabled
    pub notifications_enabled: bool,
    /// Optional monthly budget
    pub monthly_budget: Option<f64>,
    /// Display currency code
    pub currency: String,
    /// UI theme
    pub theme: String,
    /// UI language code
    pub language: String,
}

impl Model {
    /// The stats view of this profile.
    #[must_use]
    pub fn stats(&self) -> UserStats {
        UserStats {
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            total_points_earned: self.total_points_earned,
            current_level: self.current_level,
            total_saved: self.total_saved,
            total_spent: self.total_spent,
            adhd_tax_total: self.adhd_tax_total,
        }
    }

    /// The settings view of this profile.
    #[must_use]
    pub fn settings(&self) -> UserSettings {
        UserSettings {
            impulse_threshold: self.impulse_threshold,
            cooldown_hours: self.cooldown_hours,
            notifications_enabled: self.notifications_enabled,
            monthly_budget: self.monthly_budget,
            currency: self.currency.clone(),
            theme: self.theme.clone(),
            language: self.language.clone(),
        }
    }
}
