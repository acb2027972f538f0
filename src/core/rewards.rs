//! Points, leveling, and badge business logic.
//!
//! All grants go through this module so the reward ledger and the profile
//! aggregates can never drift apart. The ledger is append-only; the profile
//! carries the running totals. Leveling is recomputed iteratively after every
//! points mutation so a large grant cascades through multiple level-ups
//! without unbounded recursion.

use crate::{
    core::{badges, profile},
    entities::{
        RewardKind, UserBadge, reward, user_badge,
        user_profile,
    },
    errors::{Error, Result},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

/// Points required per level: `level = total / POINTS_PER_LEVEL + 1`.
pub const POINTS_PER_LEVEL: i64 = 300;
/// Bonus granted each time the level rises.
pub const LEVEL_UP_BONUS: i64 = 100;
/// Bonus granted when a badge is unlocked.
pub const BADGE_BONUS: i64 = 100;

/// Appends a points reward and folds it into the profile totals.
///
/// After adding `amount`, the level is recomputed as
/// `total / 300 + 1`. Each time the level rises, a 100-point bonus reward is
/// appended and folded into the total before recomputing, so a single grant
/// can cascade through several level-ups; the loop terminates because the
/// bonus is smaller than the level threshold.
///
/// Returns the updated profile.
pub async fn award_points<C>(
    db: &C,
    user_id: &str,
    amount: i64,
    description: &str,
    source: &str,
) -> Result<user_profile::Model>
where
    C: ConnectionTrait,
{
    if amount <= 0 {
        return Err(Error::Config {
            message: format!("Point awards must be positive, got {amount}"),
        });
    }

    let current = profile::get_or_init_profile(db, user_id).await?;

    reward::ActiveModel {
        user_id: Set(user_id.to_string()),
        kind: Set(RewardKind::Points),
        points: Set(Some(amount)),
        badge_id: Set(None),
        earned_at: Set(chrono::Utc::now()),
        description: Set(description.to_string()),
        source: Set(source.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let mut total = current.total_points_earned + amount;
    let mut level = current.current_level;

    loop {
        let next = total / POINTS_PER_LEVEL + 1;
        if next <= level {
            break;
        }
        level = next;

        reward::ActiveModel {
            user_id: Set(user_id.to_string()),
            kind: Set(RewardKind::Points),
            points: Set(Some(LEVEL_UP_BONUS)),
            badge_id: Set(None),
            earned_at: Set(chrono::Utc::now()),
            description: Set(format!("Reached Level {level}!")),
            source: Set("level_up".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        total += LEVEL_UP_BONUS;
    }

    let mut active: user_profile::ActiveModel = current.into();
    active.total_points_earned = Set(total);
    active.current_level = Set(level);
    active.update(db).await.map_err(Into::into)
}

/// Grants a badge if the user does not already hold it.
///
/// Idempotent: returns `Ok(None)` without touching any state when the badge
/// is already held. Otherwise records membership, appends a badge reward, and
/// grants the flat badge bonus (which may itself cascade a level-up).
/// Unknown catalogue ids are rejected.
///
/// Returns the updated profile when the badge was newly granted.
pub async fn award_badge<C>(
    db: &C,
    user_id: &str,
    badge_id: &str,
    description: &str,
) -> Result<Option<user_profile::Model>>
where
    C: ConnectionTrait,
{
    if badges::find(badge_id).is_none() {
        return Err(Error::UnknownBadge {
            badge_id: badge_id.to_string(),
        });
    }

    if has_badge(db, user_id, badge_id).await? {
        return Ok(None);
    }

    let now = chrono::Utc::now();

    user_badge::ActiveModel {
        user_id: Set(user_id.to_string()),
        badge_id: Set(badge_id.to_string()),
        earned_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    reward::ActiveModel {
        user_id: Set(user_id.to_string()),
        kind: Set(RewardKind::Badge),
        points: Set(None),
        badge_id: Set(Some(badge_id.to_string())),
        earned_at: Set(now),
        description: Set(description.to_string()),
        source: Set("achievement".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let updated = award_points(
        db,
        user_id,
        BADGE_BONUS,
        &format!("Earned badge: {description}"),
        "badge_earned",
    )
    .await?;

    Ok(Some(updated))
}

/// Whether the user already holds the given badge.
pub async fn has_badge<C>(db: &C, user_id: &str, badge_id: &str) -> Result<bool>
where
    C: ConnectionTrait,
{
    UserBadge::find()
        .filter(user_badge::Column::UserId.eq(user_id))
        .filter(user_badge::Column::BadgeId.eq(badge_id))
        .one(db)
        .await
        .map(|row| row.is_some())
        .map_err(Into::into)
}

/// All badge ids the user has earned, oldest first.
pub async fn get_badges<C>(db: &C, user_id: &str) -> Result<Vec<String>>
where
    C: ConnectionTrait,
{
    let rows = UserBadge::find()
        .filter(user_badge::Column::UserId.eq(user_id))
        .order_by_asc(user_badge::Column::EarnedAt)
        .all(db)
        .await?;

    Ok(rows.into_iter().map(|row| row.badge_id).collect())
}

/// The user's reward ledger, newest first.
pub async fn get_rewards<C>(db: &C, user_id: &str) -> Result<Vec<reward::Model>>
where
    C: ConnectionTrait,
{
    crate::entities::Reward::find()
        .filter(reward::Column::UserId.eq(user_id))
        .order_by_desc(reward::Column::EarnedAt)
        .order_by_desc(reward::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
