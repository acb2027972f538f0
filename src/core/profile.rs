//! User profile business logic - singleton stats/settings per user.
//!
//! The profile row is created lazily with defaults on first access. Settings
//! change only through an explicit save with a partial update; stats columns
//! are written exclusively by the other core modules (wishlist, rewards,
//! purchases, ADHD tax), never through this module's settings path.

use crate::{
    entities::{UserProfile, user_profile},
    errors::{Error, Result},
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

/// Default impulse threshold for new profiles, in currency units.
pub const DEFAULT_IMPULSE_THRESHOLD: f64 = 50.0;
/// Default cooldown duration for new profiles, in hours.
pub const DEFAULT_COOLDOWN_HOURS: i32 = 48;
/// Default monthly budget for new profiles.
pub const DEFAULT_MONTHLY_BUDGET: f64 = 1000.0;
/// The only cooldown durations a user may choose.
pub const ALLOWED_COOLDOWN_HOURS: [i32; 3] = [24, 48, 72];

const ALLOWED_THEMES: [&str; 3] = ["light", "dark", "auto"];

/// Partial settings update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct SettingsUpdate {
    /// New impulse threshold
    pub impulse_threshold: Option<f64>,
    /// New cooldown duration in hours (24, 48, or 72)
    pub cooldown_hours: Option<i32>,
    /// New notification flag
    pub notifications_enabled: Option<bool>,
    /// New monthly budget
    pub monthly_budget: Option<f64>,
    /// New display currency code
    pub currency: Option<String>,
    /// New UI theme
    pub theme: Option<String>,
    /// New UI language code
    pub language: Option<String>,
}

/// Fetches the user's profile, creating it with default stats and settings
/// if this is the first time the user is seen.
///
/// This is the initialize-if-absent read every other core module goes
/// through before touching stats.
pub async fn get_or_init_profile<C>(db: &C, user_id: &str) -> Result<user_profile::Model>
where
    C: ConnectionTrait,
{
    if let Some(profile) = UserProfile::find_by_id(user_id).one(db).await? {
        return Ok(profile);
    }

    let profile = user_profile::ActiveModel {
        user_id: Set(user_id.to_string()),
        created_at: Set(chrono::Utc::now()),
        current_streak: Set(0),
        longest_streak: Set(0),
        total_points_earned: Set(0),
        current_level: Set(1),
        total_saved: Set(0.0),
        total_spent: Set(0.0),
        adhd_tax_total: Set(0.0),
        impulse_threshold: Set(DEFAULT_IMPULSE_THRESHOLD),
        cooldown_hours: Set(DEFAULT_COOLDOWN_HOURS),
        notifications_enabled: Set(true),
        monthly_budget: Set(Some(DEFAULT_MONTHLY_BUDGET)),
        currency: Set("USD".to_string()),
        theme: Set("light".to_string()),
        language: Set("en".to_string()),
    };

    profile.insert(db).await.map_err(Into::into)
}

/// Applies a partial settings update after validating every provided field.
///
/// Validation happens before any write, so a rejected update leaves the
/// profile untouched. Changing `cooldown_hours` only affects wishlist items
/// created afterwards; existing items keep the cooldown end they were
/// created with.
pub async fn update_settings<C>(
    db: &C,
    user_id: &str,
    update: SettingsUpdate,
) -> Result<user_profile::Model>
where
    C: ConnectionTrait,
{
    if let Some(threshold) = update.impulse_threshold {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(Error::InvalidAmount { amount: threshold });
        }
    }
    if let Some(hours) = update.cooldown_hours {
        if !ALLOWED_COOLDOWN_HOURS.contains(&hours) {
            return Err(Error::Config {
                message: format!("Cooldown must be one of 24, 48, or 72 hours, got {hours}"),
            });
        }
    }
    if let Some(budget) = update.monthly_budget {
        if !budget.is_finite() || budget < 0.0 {
            return Err(Error::InvalidAmount { amount: budget });
        }
    }
    if let Some(ref currency) = update.currency {
        if currency.trim().is_empty() {
            return Err(Error::Config {
                message: "Currency cannot be empty".to_string(),
            });
        }
    }
    if let Some(ref theme) = update.theme {
        if !ALLOWED_THEMES.contains(&theme.as_str()) {
            return Err(Error::Config {
                message: format!("Theme must be one of light, dark, or auto, got '{theme}'"),
            });
        }
    }
    if let Some(ref language) = update.language {
        if language.trim().is_empty() {
            return Err(Error::Config {
                message: "Language cannot be empty".to_string(),
            });
        }
    }

    let profile = get_or_init_profile(db, user_id).await?;
    let mut active: user_profile::ActiveModel = profile.into();

    if let Some(threshold) = update.impulse_threshold {
        active.impulse_threshold = Set(threshold);
    }
    if let Some(hours) = update.cooldown_hours {
        active.cooldown_hours = Set(hours);
    }
    if let Some(enabled) = update.notifications_enabled {
        active.notifications_enabled = Set(enabled);
    }
    if let Some(budget) = update.monthly_budget {
        active.monthly_budget = Set(Some(budget));
    }
    if let Some(currency) = update.currency {
        active.currency = Set(currency);
    }
    if let Some(theme) = update.theme {
        active.theme = Set(theme);
    }
    if let Some(language) = update.language {
        active.language = Set(language);
    }

    active.update(db).await.map_err(Into::into)
}
