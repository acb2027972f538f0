//! Reward ledger and badge endpoints.

use crate::{
    api::{AppState, UserId},
    core::{badges, rewards},
    entities::reward,
    errors::Result,
};
use axum::{Json, extract::State};
use serde::Serialize;

/// A catalogue badge together with whether this user has earned it.
#[derive(Debug, Serialize)]
pub struct BadgeStatus {
    /// The catalogue definition
    #[serde(flatten)]
    pub badge: badges::Badge,
    /// Whether the user holds it
    pub earned: bool,
}

/// `GET /api/rewards` - the user's reward ledger, newest first.
pub async fn list(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<Vec<reward::Model>>> {
    let rewards = rewards::get_rewards(&state.db, &user_id).await?;
    Ok(Json(rewards))
}

/// `GET /api/badges` - the full catalogue with earned markers.
pub async fn badges(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<Vec<BadgeStatus>>> {
    let earned = rewards::get_badges(&state.db, &user_id).await?;

    let catalogue = badges::CATALOGUE
        .iter()
        .map(|badge| BadgeStatus {
            badge: *badge,
            earned: earned.iter().any(|id| id == badge.id),
        })
        .collect();

    Ok(Json(catalogue))
}
