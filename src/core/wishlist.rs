//! Wishlist lifecycle business logic - the cooldown state machine.
//!
//! Items move strictly `cooling_down -> ready_to_review -> {purchased |
//! dismissed}`. The cooldown end is snapshotted from the user's settings at
//! creation and never recomputed. Purchase and dismiss are rejected on
//! anything but a ready item, independent of what the caller's UI exposes.
//! Every multi-record mutation runs in a single transaction so the item, the
//! purchase record, the profile aggregates, and the reward ledger can never
//! land partially.

use crate::{
    core::{profile, purchases, rewards},
    entities::{
        MoodTag, PurchaseCategory, UserStats, WishlistItem, WishlistStatus, purchase,
        wishlist_item,
    },
    errors::{Error, Result},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait, prelude::DateTimeUtc,
};

/// Points granted for putting an item on the wishlist instead of buying it.
pub const WISHLIST_ADD_POINTS: i64 = 5;
/// Points granted for waiting out the cooldown before purchasing.
pub const COOLDOWN_COMPLETE_POINTS: i64 = 20;
/// Points granted for dismissing a ready item.
pub const DISMISS_POINTS: i64 = 50;
/// Lifetime savings threshold for the `saver-supreme` badge.
pub const SAVER_SUPREME_THRESHOLD: f64 = 500.0;

/// Streak thresholds and the badges they unlock, checked after every
/// dismissal. A badge fires when the streak reaches or exceeds its threshold
/// for the first time.
const STREAK_BADGES: &[(i32, &str, &str)] = &[
    (3, "3-day-streak", "Three days without impulse purchases"),
    (7, "week-warrior", "A full week of mindful spending"),
];

/// Input for a new wishlist item.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NewWishlistItem {
    /// Item name
    pub name: String,
    /// Item price
    pub price: f64,
    /// Spending category
    pub category: PurchaseCategory,
    /// Mood when the urge hit
    #[serde(default)]
    pub mood_tag: Option<MoodTag>,
    /// Free-text situational context
    #[serde(default)]
    pub context_tag: Option<String>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Product link
    #[serde(default)]
    pub url: Option<String>,
}

/// Result of converting a ready item into a purchase.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PurchaseOutcome {
    /// The item in its terminal `purchased` state
    pub item: wishlist_item::Model,
    /// The purchase record created from it
    pub purchase: purchase::Model,
    /// Profile stats after the streak reset and point award
    pub stats: UserStats,
}

/// Result of dismissing a ready item.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DismissOutcome {
    /// The item in its terminal `dismissed` state
    pub item: wishlist_item::Model,
    /// Profile stats after savings, streak, and point updates
    pub stats: UserStats,
    /// Badges newly earned by this dismissal
    pub new_badges: Vec<String>,
}

/// Adds an item to the wishlist, starting its cooldown.
///
/// The cooldown end is `now + cooldown_hours` using the user's setting at
/// this moment; later settings changes do not move it. Awards a small point
/// grant for choosing the wishlist over an immediate purchase.
pub async fn add_item(
    db: &DatabaseConnection,
    user_id: &str,
    input: NewWishlistItem,
) -> Result<wishlist_item::Model> {
    if input.name.trim().is_empty() {
        return Err(Error::Config {
            message: "Wishlist item name cannot be empty".to_string(),
        });
    }
    if !input.price.is_finite() || input.price <= 0.0 {
        return Err(Error::InvalidAmount {
            amount: input.price,
        });
    }

    let txn = db.begin().await?;

    let settings = profile::get_or_init_profile(&txn, user_id).await?;
    let added_at = chrono::Utc::now();
    let cooldown_ends_at = added_at + chrono::Duration::hours(i64::from(settings.cooldown_hours));

    let item = wishlist_item::ActiveModel {
        user_id: Set(user_id.to_string()),
        name: Set(input.name.trim().to_string()),
        price: Set(input.price),
        category: Set(input.category),
        mood_tag: Set(input.mood_tag),
        context_tag: Set(input.context_tag),
        notes: Set(input.notes),
        url: Set(input.url),
        added_at: Set(added_at),
        cooldown_ends_at: Set(cooldown_ends_at),
        status: Set(WishlistStatus::CoolingDown),
        purchased_at: Set(None),
        dismissed_at: Set(None),
        dismiss_reason: Set(None),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    rewards::award_points(
        &txn,
        user_id,
        WISHLIST_ADD_POINTS,
        "Added item to wishlist",
        "wishlist_add",
    )
    .await?;

    txn.commit().await?;

    Ok(item)
}

/// The user's wishlist, newest first.
pub async fn get_wishlist(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<wishlist_item::Model>> {
    WishlistItem::find()
        .filter(wishlist_item::Column::UserId.eq(user_id))
        .order_by_desc(wishlist_item::Column::AddedAt)
        .order_by_desc(wishlist_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Transitions every cooling-down item whose cooldown has elapsed to
/// `ready_to_review`.
///
/// Scoped to one user when `user_id` is given, otherwise a global sweep (the
/// background poller's mode). This is the only way an item leaves
/// `cooling_down`, and it has no side effects beyond the status change: no
/// points, no stats.
///
/// Returns the items that were released.
pub async fn release_expired<C>(
    db: &C,
    user_id: Option<&str>,
    now: DateTimeUtc,
) -> Result<Vec<wishlist_item::Model>>
where
    C: ConnectionTrait,
{
    let mut query = WishlistItem::find()
        .filter(wishlist_item::Column::Status.eq(WishlistStatus::CoolingDown))
        .filter(wishlist_item::Column::CooldownEndsAt.lte(now));
    if let Some(user_id) = user_id {
        query = query.filter(wishlist_item::Column::UserId.eq(user_id));
    }

    let expired = query.all(db).await?;

    let mut released = Vec::with_capacity(expired.len());
    for item in expired {
        let mut active: wishlist_item::ActiveModel = item.into();
        active.status = Set(WishlistStatus::ReadyToReview);
        released.push(active.update(db).await?);
    }

    Ok(released)
}

/// Converts a ready item into a purchase ("still want it").
///
/// Requires `ready_to_review`; a completed purchase breaks the streak no
/// matter how long the wait was. Creates the purchase record (flagged as an
/// impulse buy), adds the price to `total_spent`, resets the streak, and
/// grants the cooldown-completion points.
pub async fn purchase_item(
    db: &DatabaseConnection,
    user_id: &str,
    id: i64,
) -> Result<PurchaseOutcome> {
    let txn = db.begin().await?;

    let item = get_owned_item(&txn, user_id, id).await?;
    ensure_ready(&item)?;

    let now = chrono::Utc::now();

    let purchase = purchases::insert_purchase(
        &txn,
        user_id,
        &purchases::NewPurchase {
            name: item.name.clone(),
            amount: item.price,
            category: item.category.clone(),
            was_impulse: true,
            mood_tag: item.mood_tag.clone(),
            context_tag: item.context_tag.clone(),
            notes: item.notes.clone(),
        },
        now,
    )
    .await?;

    let price = item.price;
    let mut active: wishlist_item::ActiveModel = item.into();
    active.status = Set(WishlistStatus::Purchased);
    active.purchased_at = Set(Some(now));
    let item = active.update(&txn).await?;

    let current = profile::get_or_init_profile(&txn, user_id).await?;
    let mut stats_update: crate::entities::user_profile::ActiveModel = current.clone().into();
    stats_update.total_spent = Set(current.total_spent + price);
    stats_update.current_streak = Set(0);
    stats_update.update(&txn).await?;

    let updated = rewards::award_points(
        &txn,
        user_id,
        COOLDOWN_COMPLETE_POINTS,
        "Completed cooldown before purchase",
        "cooldown_complete",
    )
    .await?;

    txn.commit().await?;

    Ok(PurchaseOutcome {
        item,
        purchase,
        stats: updated.stats(),
    })
}

/// Dismisses a ready item ("changed my mind"), banking its price as savings.
///
/// Requires `ready_to_review`. Adds the price to `total_saved`, extends the
/// streak (and the longest-streak high-water mark), grants the dismissal
/// points, and checks badge thresholds against the values from before this
/// dismissal so each badge fires exactly once, at the crossing.
pub async fn dismiss_item(
    db: &DatabaseConnection,
    user_id: &str,
    id: i64,
    reason: Option<String>,
) -> Result<DismissOutcome> {
    let txn = db.begin().await?;

    let item = get_owned_item(&txn, user_id, id).await?;
    ensure_ready(&item)?;

    let now = chrono::Utc::now();
    let price = item.price;
    let name = item.name.clone();

    let mut active: wishlist_item::ActiveModel = item.into();
    active.status = Set(WishlistStatus::Dismissed);
    active.dismissed_at = Set(Some(now));
    active.dismiss_reason = Set(reason);
    let item = active.update(&txn).await?;

    let current = profile::get_or_init_profile(&txn, user_id).await?;
    let prior_saved = current.total_saved;
    let prior_streak = current.current_streak;
    let new_saved = prior_saved + price;
    let new_streak = prior_streak + 1;

    let mut stats_update: crate::entities::user_profile::ActiveModel = current.clone().into();
    stats_update.total_saved = Set(new_saved);
    stats_update.current_streak = Set(new_streak);
    stats_update.longest_streak = Set(current.longest_streak.max(new_streak));
    stats_update.update(&txn).await?;

    rewards::award_points(
        &txn,
        user_id,
        DISMISS_POINTS,
        &format!("Dismissed \"{name}\" and saved ${price}"),
        "wishlist_dismiss",
    )
    .await?;

    let mut new_badges = Vec::new();

    if prior_saved < SAVER_SUPREME_THRESHOLD
        && new_saved >= SAVER_SUPREME_THRESHOLD
        && rewards::award_badge(
            &txn,
            user_id,
            "saver-supreme",
            "Saved $500 by dismissing impulses",
        )
        .await?
        .is_some()
    {
        new_badges.push("saver-supreme".to_string());
    }

    for (threshold, badge_id, description) in STREAK_BADGES {
        if prior_streak < *threshold
            && new_streak >= *threshold
            && rewards::award_badge(&txn, user_id, badge_id, description)
                .await?
                .is_some()
        {
            new_badges.push((*badge_id).to_string());
        }
    }

    let updated = profile::get_or_init_profile(&txn, user_id).await?;

    txn.commit().await?;

    Ok(DismissOutcome {
        item,
        stats: updated.stats(),
        new_badges,
    })
}

/// Deletes a wishlist item outright, in any status.
///
/// This is the escape hatch outside the reward lifecycle: no stats move, no
/// points, no badge checks, regardless of the item's status.
pub async fn delete_item(db: &DatabaseConnection, user_id: &str, id: i64) -> Result<()> {
    let item = get_owned_item(db, user_id, id).await?;
    item.delete(db).await?;
    Ok(())
}

/// Fetches an item by id, treating another user's item as missing.
async fn get_owned_item<C>(db: &C, user_id: &str, id: i64) -> Result<wishlist_item::Model>
where
    C: ConnectionTrait,
{
    WishlistItem::find_by_id(id)
        .one(db)
        .await?
        .filter(|item| item.user_id == user_id)
        .ok_or(Error::WishlistItemNotFound { id })
}

/// Rejects purchase/dismiss attempts on items that are not ready for review.
fn ensure_ready(item: &wishlist_item::Model) -> Result<()> {
    if item.status == WishlistStatus::ReadyToReview {
        Ok(())
    } else {
        Err(Error::NotReadyForReview {
            id: item.id,
            status: sea_orm::ActiveEnum::to_value(&item.status),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::profile::get_or_init_profile;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_add_item_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = add_item(&db, "user1", test_wishlist_input("", 10.0)).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        let result = add_item(&db, "user1", test_wishlist_input("   ", 10.0)).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        let result = add_item(&db, "user1", test_wishlist_input("Gadget", 0.0)).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: 0.0 }
        ));

        let result = add_item(&db, "user1", test_wishlist_input("Gadget", -1.0)).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidAmount { .. }));

        let result = add_item(&db, "user1", test_wishlist_input("Gadget", f64::INFINITY)).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidAmount { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_starts_cooldown_and_awards_points() -> Result<()> {
        let db = setup_test_db().await?;

        let item = add_item(&db, "user1", test_wishlist_input("Gadget", 30.0)).await?;

        assert_eq!(item.status, WishlistStatus::CoolingDown);
        assert_eq!(
            item.cooldown_ends_at,
            item.added_at + chrono::Duration::hours(48)
        );
        assert!(item.purchased_at.is_none());
        assert!(item.dismissed_at.is_none());

        let stats = get_or_init_profile(&db, "user1").await?.stats();
        assert_eq!(stats.total_points_earned, WISHLIST_ADD_POINTS);

        let rewards = crate::core::rewards::get_rewards(&db, "user1").await?;
        assert_eq!(rewards.len(), 1);
        assert_eq!(rewards[0].source, "wishlist_add");

        Ok(())
    }

    #[tokio::test]
    async fn test_cooldown_snapshot_survives_settings_change() -> Result<()> {
        let db = setup_test_db().await?;

        set_cooldown_hours(&db, "user1", 24).await?;
        let item = add_item(&db, "user1", test_wishlist_input("Gadget", 30.0)).await?;
        assert_eq!(
            item.cooldown_ends_at,
            item.added_at + chrono::Duration::hours(24)
        );

        // Switching to 72h later must not move the existing item's cooldown.
        set_cooldown_hours(&db, "user1", 72).await?;
        let reloaded = WishlistItem::find_by_id(item.id).one(&db).await?.unwrap();
        assert_eq!(reloaded.cooldown_ends_at, item.cooldown_ends_at);

        // But a new item picks up the new setting.
        let later = add_item(&db, "user1", test_wishlist_input("Other", 15.0)).await?;
        assert_eq!(
            later.cooldown_ends_at,
            later.added_at + chrono::Duration::hours(72)
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_release_only_at_or_after_expiry() -> Result<()> {
        let db = setup_test_db().await?;

        let item = add_item(&db, "user1", test_wishlist_input("Gadget", 30.0)).await?;

        // One second before expiry: nothing moves.
        let early = item.cooldown_ends_at - chrono::Duration::seconds(1);
        assert!(release_expired(&db, None, early).await?.is_empty());
        let reloaded = WishlistItem::find_by_id(item.id).one(&db).await?.unwrap();
        assert_eq!(reloaded.status, WishlistStatus::CoolingDown);

        // At exactly the cooldown end the item is released.
        let released = release_expired(&db, None, item.cooldown_ends_at).await?;
        assert_eq!(released.len(), 1);
        assert_eq!(released[0].status, WishlistStatus::ReadyToReview);

        Ok(())
    }

    #[tokio::test]
    async fn test_release_grants_no_points() -> Result<()> {
        let db = setup_test_db().await?;

        let item = add_item(&db, "user1", test_wishlist_input("Gadget", 30.0)).await?;
        let before = get_or_init_profile(&db, "user1").await?.stats();

        release_expired(&db, None, item.cooldown_ends_at).await?;

        let after = get_or_init_profile(&db, "user1").await?.stats();
        assert_eq!(after, before);

        Ok(())
    }

    #[tokio::test]
    async fn test_release_respects_user_scope() -> Result<()> {
        let db = setup_test_db().await?;

        let mine = add_item(&db, "user1", test_wishlist_input("Mine", 30.0)).await?;
        let theirs = add_item(&db, "user2", test_wishlist_input("Theirs", 40.0)).await?;
        let far_future = mine.cooldown_ends_at + chrono::Duration::days(30);

        let released = release_expired(&db, Some("user1"), far_future).await?;
        assert_eq!(released.len(), 1);
        assert_eq!(released[0].id, mine.id);

        let other = WishlistItem::find_by_id(theirs.id).one(&db).await?.unwrap();
        assert_eq!(other.status, WishlistStatus::CoolingDown);

        // The global sweep picks up the rest.
        let released = release_expired(&db, None, far_future).await?;
        assert_eq!(released.len(), 1);
        assert_eq!(released[0].id, theirs.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_purchase_rejected_while_cooling_down() -> Result<()> {
        let db = setup_test_db().await?;

        let item = add_item(&db, "user1", test_wishlist_input("Gadget", 30.0)).await?;
        let before = get_or_init_profile(&db, "user1").await?.stats();

        let result = purchase_item(&db, "user1", item.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotReadyForReview { id: _, status: _ }
        ));

        // No state change, no purchase record, no rewards.
        let reloaded = WishlistItem::find_by_id(item.id).one(&db).await?.unwrap();
        assert_eq!(reloaded.status, WishlistStatus::CoolingDown);
        assert!(crate::core::purchases::get_purchases(&db, "user1")
            .await?
            .is_empty());
        assert_eq!(get_or_init_profile(&db, "user1").await?.stats(), before);

        Ok(())
    }

    #[tokio::test]
    async fn test_dismiss_rejected_on_terminal_item() -> Result<()> {
        let db = setup_test_db().await?;

        let item = ready_test_item(&db, "user1", "Gadget", 30.0).await?;
        dismiss_item(&db, "user1", item.id, None).await?;

        // Dismissing again must fail: terminal states are never left.
        let result = dismiss_item(&db, "user1", item.id, None).await;
        assert!(matches!(result.unwrap_err(), Error::NotReadyForReview { .. }));
        let result = purchase_item(&db, "user1", item.id).await;
        assert!(matches!(result.unwrap_err(), Error::NotReadyForReview { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_actions_on_missing_or_foreign_items() -> Result<()> {
        let db = setup_test_db().await?;

        let result = purchase_item(&db, "user1", 999).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::WishlistItemNotFound { id: 999 }
        ));

        // Another user's item reads as missing, not as a permission error.
        let item = ready_test_item(&db, "user2", "Theirs", 30.0).await?;
        let result = dismiss_item(&db, "user1", item.id, None).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::WishlistItemNotFound { .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_purchase_creates_record_and_resets_streak() -> Result<()> {
        let db = setup_test_db().await?;

        // Build up a streak first.
        let first = ready_test_item(&db, "user1", "First", 10.0).await?;
        dismiss_item(&db, "user1", first.id, None).await?;
        let second = ready_test_item(&db, "user1", "Second", 15.0).await?;
        dismiss_item(&db, "user1", second.id, None).await?;

        let item = ready_test_item(&db, "user1", "Headphones", 80.0).await?;
        let outcome = purchase_item(&db, "user1", item.id).await?;

        assert_eq!(outcome.item.status, WishlistStatus::Purchased);
        assert!(outcome.item.purchased_at.is_some());
        assert_eq!(outcome.purchase.name, "Headphones");
        assert_eq!(outcome.purchase.amount, 80.0);
        assert!(outcome.purchase.was_impulse);

        // Streak broken, longest preserved, spending counted.
        assert_eq!(outcome.stats.current_streak, 0);
        assert_eq!(outcome.stats.longest_streak, 2);
        assert_eq!(outcome.stats.total_spent, 80.0);

        let reward = crate::core::rewards::get_rewards(&db, "user1")
            .await?
            .into_iter()
            .find(|reward| reward.source == "cooldown_complete")
            .unwrap();
        assert_eq!(reward.points, Some(COOLDOWN_COMPLETE_POINTS));

        Ok(())
    }

    #[tokio::test]
    async fn test_dismiss_banks_savings_and_extends_streak() -> Result<()> {
        let db = setup_test_db().await?;

        let item = ready_test_item(&db, "user1", "Gadget", 65.5).await?;
        let outcome = dismiss_item(&db, "user1", item.id, Some("didn't need it".to_string()))
            .await?;

        assert_eq!(outcome.item.status, WishlistStatus::Dismissed);
        assert!(outcome.item.dismissed_at.is_some());
        assert_eq!(outcome.item.dismiss_reason.as_deref(), Some("didn't need it"));
        assert_eq!(outcome.stats.total_saved, 65.5);
        assert_eq!(outcome.stats.current_streak, 1);
        assert_eq!(outcome.stats.longest_streak, 1);

        let reward = crate::core::rewards::get_rewards(&db, "user1")
            .await?
            .into_iter()
            .find(|reward| reward.source == "wishlist_dismiss")
            .unwrap();
        assert_eq!(reward.points, Some(DISMISS_POINTS));
        assert!(reward.description.contains("Gadget"));
        assert!(reward.description.contains("65.5"));

        Ok(())
    }

    #[tokio::test]
    async fn test_sequential_dismissals_accumulate() -> Result<()> {
        let db = setup_test_db().await?;

        let prices = [12.0, 8.5, 20.0, 9.5];
        for (index, price) in prices.iter().enumerate() {
            let item = ready_test_item(&db, "user1", &format!("Item {index}"), *price).await?;
            let outcome = dismiss_item(&db, "user1", item.id, None).await?;
            assert_eq!(outcome.stats.current_streak, i32::try_from(index).unwrap() + 1);
        }

        let stats = get_or_init_profile(&db, "user1").await?.stats();
        assert_eq!(stats.total_saved, prices.iter().sum::<f64>());
        assert_eq!(stats.current_streak, 4);
        assert_eq!(stats.longest_streak, 4);

        Ok(())
    }

    #[tokio::test]
    async fn test_saver_supreme_fires_exactly_once_at_crossing() -> Result<()> {
        let db = setup_test_db().await?;

        let first = ready_test_item(&db, "user1", "Big one", 499.99).await?;
        let outcome = dismiss_item(&db, "user1", first.id, None).await?;
        assert!(outcome.new_badges.is_empty());

        // This dismissal crosses the $500 line.
        let second = ready_test_item(&db, "user1", "Crosser", 0.01).await?;
        let outcome = dismiss_item(&db, "user1", second.id, None).await?;
        assert!(outcome.new_badges.contains(&"saver-supreme".to_string()));

        // Staying above the line must not re-grant.
        let third = ready_test_item(&db, "user1", "After", 50.0).await?;
        let outcome = dismiss_item(&db, "user1", third.id, None).await?;
        assert!(!outcome.new_badges.contains(&"saver-supreme".to_string()));

        let badges = crate::core::rewards::get_badges(&db, "user1").await?;
        assert_eq!(
            badges.iter().filter(|badge| *badge == "saver-supreme").count(),
            1
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_streak_badges_fire_at_thresholds_only() -> Result<()> {
        let db = setup_test_db().await?;

        for round in 1..=8 {
            let item = ready_test_item(&db, "user1", &format!("Item {round}"), 5.0).await?;
            let outcome = dismiss_item(&db, "user1", item.id, None).await?;

            match round {
                3 => assert_eq!(outcome.new_badges, vec!["3-day-streak".to_string()]),
                7 => assert_eq!(outcome.new_badges, vec!["week-warrior".to_string()]),
                _ => assert!(outcome.new_badges.is_empty(), "round {round}"),
            }
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_streak_badge_not_regranted_after_reset() -> Result<()> {
        let db = setup_test_db().await?;

        // Reach 3, break the streak, then climb back past 3.
        for round in 0..3 {
            let item = ready_test_item(&db, "user1", &format!("A{round}"), 5.0).await?;
            dismiss_item(&db, "user1", item.id, None).await?;
        }
        let bought = ready_test_item(&db, "user1", "Break", 5.0).await?;
        purchase_item(&db, "user1", bought.id).await?;

        for round in 0..4 {
            let item = ready_test_item(&db, "user1", &format!("B{round}"), 5.0).await?;
            let outcome = dismiss_item(&db, "user1", item.id, None).await?;
            assert!(!outcome.new_badges.contains(&"3-day-streak".to_string()));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_ignores_lifecycle_and_stats() -> Result<()> {
        let db = setup_test_db().await?;

        let cooling = add_item(&db, "user1", test_wishlist_input("Cooling", 30.0)).await?;
        let before = get_or_init_profile(&db, "user1").await?.stats();

        delete_item(&db, "user1", cooling.id).await?;
        assert!(WishlistItem::find_by_id(cooling.id).one(&db).await?.is_none());
        assert_eq!(get_or_init_profile(&db, "user1").await?.stats(), before);

        let result = delete_item(&db, "user1", cooling.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::WishlistItemNotFound { .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_wishlist_ordering_and_scope() -> Result<()> {
        let db = setup_test_db().await?;

        add_item(&db, "user1", test_wishlist_input("First", 10.0)).await?;
        add_item(&db, "user1", test_wishlist_input("Second", 20.0)).await?;
        add_item(&db, "user2", test_wishlist_input("Other", 30.0)).await?;

        let list = get_wishlist(&db, "user1").await?;
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Second");
        assert_eq!(list[1].name, "First");

        Ok(())
    }

    #[tokio::test]
    async fn test_headphones_scenario_end_to_end() -> Result<()> {
        let db = setup_test_db().await?;

        // Default settings: 48 hour cooldown.
        let item = add_item(&db, "user1", test_wishlist_input("Headphones", 80.0)).await?;
        assert_eq!(
            item.cooldown_ends_at,
            item.added_at + chrono::Duration::hours(48)
        );

        // 48 hours later the poll releases it.
        let released = release_expired(&db, None, item.cooldown_ends_at).await?;
        assert_eq!(released.len(), 1);

        let outcome =
            dismiss_item(&db, "user1", item.id, Some("didn't need it".to_string())).await?;

        assert_eq!(outcome.stats.total_saved, 80.0);
        assert_eq!(outcome.stats.current_streak, 1);
        // 5 for the add, 50 for the dismissal.
        assert_eq!(
            outcome.stats.total_points_earned,
            WISHLIST_ADD_POINTS + DISMISS_POINTS
        );
        assert_eq!(outcome.stats.current_level, 1);

        Ok(())
    }
}
