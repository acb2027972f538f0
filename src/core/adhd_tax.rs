//! ADHD-tax ledger business logic.
//!
//! Records avoidable costs (late fees, unused subscriptions, ...) and keeps
//! the `adhd_tax_total` aggregate in step. Deleting an item reverses its
//! contribution by plain subtraction; there is no clamping and no
//! reconciliation pass against the remaining rows.

use crate::{
    core::profile,
    entities::{AdhdTaxItem, AdhdTaxKind, PurchaseCategory, adhd_tax_item},
    errors::{Error, Result},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// Input for a new ADHD-tax ledger entry.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NewAdhdTaxItem {
    /// What kind of avoidable cost this was
    pub kind: AdhdTaxKind,
    /// Amount lost
    pub amount: f64,
    /// Human-readable description of the event
    pub description: String,
    /// Optional spending category
    #[serde(default)]
    pub category: Option<PurchaseCategory>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Records an avoidable cost and adds it to the running total.
pub async fn add_item(
    db: &DatabaseConnection,
    user_id: &str,
    input: NewAdhdTaxItem,
) -> Result<adhd_tax_item::Model> {
    if input.description.trim().is_empty() {
        return Err(Error::Config {
            message: "ADHD tax description cannot be empty".to_string(),
        });
    }
    if !input.amount.is_finite() || input.amount <= 0.0 {
        return Err(Error::InvalidAmount {
            amount: input.amount,
        });
    }

    let txn = db.begin().await?;

    let item = adhd_tax_item::ActiveModel {
        user_id: Set(user_id.to_string()),
        kind: Set(input.kind),
        amount: Set(input.amount),
        description: Set(input.description.trim().to_string()),
        date: Set(chrono::Utc::now()),
        category: Set(input.category),
        notes: Set(input.notes),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let current = profile::get_or_init_profile(&txn, user_id).await?;
    let new_total = current.adhd_tax_total + input.amount;
    let mut active: crate::entities::user_profile::ActiveModel = current.into();
    active.adhd_tax_total = Set(new_total);
    active.update(&txn).await?;

    txn.commit().await?;

    Ok(item)
}

/// Deletes a ledger entry and subtracts its amount from the running total.
pub async fn delete_item(db: &DatabaseConnection, user_id: &str, id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let item = AdhdTaxItem::find_by_id(id)
        .one(&txn)
        .await?
        .filter(|item| item.user_id == user_id)
        .ok_or(Error::TaxItemNotFound { id })?;

    let amount = item.amount;
    item.delete(&txn).await?;

    let current = profile::get_or_init_profile(&txn, user_id).await?;
    let new_total = current.adhd_tax_total - amount;
    let mut active: crate::entities::user_profile::ActiveModel = current.into();
    active.adhd_tax_total = Set(new_total);
    active.update(&txn).await?;

    txn.commit().await?;

    Ok(())
}

/// The user's ADHD-tax ledger, newest first.
pub async fn get_items(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<adhd_tax_item::Model>> {
    AdhdTaxItem::find()
        .filter(adhd_tax_item::Column::UserId.eq(user_id))
        .order_by_desc(adhd_tax_item::Column::Date)
        .order_by_desc(adhd_tax_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
