//! Purchase entity - A finalized spending record.
//!
//! Created either by converting a ready wishlist item ("still want it") or by
//! logging a purchase directly. Rows are immutable once created; the engine
//! never mutates or deletes them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{MoodTag, PurchaseCategory};

/// Purchase database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchases")]
pub struct Model {
    /// Unique identifier for the purchase
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user id
    pub user_id: String,
    /// What was bought
    pub name: String,
    /// Amount spent (always positive)
    pub amount: f64,
    /// Spending category
    pub category: PurchaseCategory,
    /// When the purchase happened
    pub date: DateTimeUtc,
    /// Whether this was an impulse buy (true for converted wishlist items)
    pub was_impulse: bool,
    /// Mood recorded at purchase time
    pub mood_tag: Option<MoodTag>,
    /// Free-text situational context
    pub context_tag: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
}

/// Purchases have no table-level relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
