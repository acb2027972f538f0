//! Profile and settings endpoints.

use crate::{
    api::{AppState, UserId},
    core::{profile, rewards},
    entities::{UserSettings, UserStats},
    errors::Result,
};
use axum::{Json, extract::State};
use serde::Serialize;

/// The per-user singleton as exposed over the API: stats, settings, and the
/// earned badge set.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// Derived aggregates
    pub stats: UserStats,
    /// Current settings
    pub settings: UserSettings,
    /// Earned badge ids, oldest first
    pub badges: Vec<String>,
}

/// `GET /api/profile` - stats, settings, and earned badges.
pub async fn get_profile(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<ProfileResponse>> {
    let user = profile::get_or_init_profile(&state.db, &user_id).await?;
    let badges = rewards::get_badges(&state.db, &user_id).await?;

    Ok(Json(ProfileResponse {
        stats: user.stats(),
        settings: user.settings(),
        badges,
    }))
}

/// `PUT /api/settings` - partial settings update; omitted fields are left
/// unchanged.
pub async fn update_settings(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(update): Json<profile::SettingsUpdate>,
) -> Result<Json<UserSettings>> {
    let updated = profile::update_settings(&state.db, &user_id, update).await?;
    Ok(Json(updated.settings()))
}
