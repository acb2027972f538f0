//! Purchase history business logic.
//!
//! Purchases enter the system two ways: the wishlist engine converts a ready
//! item ("still want it"), or the user logs spending directly. Rows are
//! immutable once created. Direct logging only moves `total_spent`; it never
//! touches streaks or points.

use crate::{
    core::profile,
    entities::{MoodTag, Purchase, PurchaseCategory, purchase},
    errors::{Error, Result},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait, prelude::DateTimeUtc,
};

/// Input for a new purchase record.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NewPurchase {
    /// What was bought
    pub name: String,
    /// Amount spent
    pub amount: f64,
    /// Spending category
    pub category: PurchaseCategory,
    /// Whether this was an impulse buy
    #[serde(default)]
    pub was_impulse: bool,
    /// Mood at purchase time
    #[serde(default)]
    pub mood_tag: Option<MoodTag>,
    /// Free-text situational context
    #[serde(default)]
    pub context_tag: Option<String>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Inserts a purchase row without touching any aggregate.
///
/// Used by [`log_purchase`] and by the wishlist engine from inside its own
/// transaction; callers are responsible for validation and for updating
/// `total_spent`.
pub(crate) async fn insert_purchase<C>(
    db: &C,
    user_id: &str,
    input: &NewPurchase,
    date: DateTimeUtc,
) -> Result<purchase::Model>
where
    C: ConnectionTrait,
{
    purchase::ActiveModel {
        user_id: Set(user_id.to_string()),
        name: Set(input.name.clone()),
        amount: Set(input.amount),
        category: Set(input.category.clone()),
        date: Set(date),
        was_impulse: Set(input.was_impulse),
        mood_tag: Set(input.mood_tag.clone()),
        context_tag: Set(input.context_tag.clone()),
        notes: Set(input.notes.clone()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Logs a purchase directly (outside the wishlist lifecycle) and adds its
/// amount to `total_spent`.
///
/// Validates the name and amount before any write. Runs in a transaction so
/// the purchase row and the stats update land together.
pub async fn log_purchase(
    db: &DatabaseConnection,
    user_id: &str,
    input: NewPurchase,
) -> Result<purchase::Model> {
    if input.name.trim().is_empty() {
        return Err(Error::Config {
            message: "Purchase name cannot be empty".to_string(),
        });
    }
    if !input.amount.is_finite() || input.amount <= 0.0 {
        return Err(Error::InvalidAmount {
            amount: input.amount,
        });
    }

    let txn = db.begin().await?;

    let purchase = insert_purchase(&txn, user_id, &input, chrono::Utc::now()).await?;

    let current = profile::get_or_init_profile(&txn, user_id).await?;
    let new_total = current.total_spent + input.amount;
    let mut active: crate::entities::user_profile::ActiveModel = current.into();
    active.total_spent = Set(new_total);
    active.update(&txn).await?;

    txn.commit().await?;

    Ok(purchase)
}

/// The user's purchase history, newest first.
pub async fn get_purchases(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<purchase::Model>> {
    Purchase::find()
        .filter(purchase::Column::UserId.eq(user_id))
        .order_by_desc(purchase::Column::Date)
        .order_by_desc(purchase::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
