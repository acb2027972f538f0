//! Wishlist item entity - A candidate purchase under cooldown evaluation.
//!
//! `cooldown_ends_at` is fixed at creation from the user's cooldown setting
//! and is never recomputed, even if the setting changes later. `status`
//! follows the strict lifecycle defined in [`super::enums::WishlistStatus`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{MoodTag, PurchaseCategory, WishlistStatus};

/// Wishlist item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wishlist_items")]
pub struct Model {
    /// Unique identifier for the wishlist item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user id
    pub user_id: String,
    /// Item name
    pub name: String,
    /// Item price (always positive)
    pub price: f64,
    /// Spending category
    pub category: PurchaseCategory,
    /// Mood recorded when the item was added
    pub mood_tag: Option<MoodTag>,
    /// Free-text situational context (e.g. `"late night browsing"`)
    pub context_tag: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Product link
    pub url: Option<String>,
    /// When the item entered the wishlist
    pub added_at: DateTimeUtc,
    /// When the mandatory waiting period elapses; fixed at creation
    pub cooldown_ends_at: DateTimeUtc,
    /// Current lifecycle status
    pub status: WishlistStatus,
    /// Set when the item was converted into a purchase
    pub purchased_at: Option<DateTimeUtc>,
    /// Set when the item was dismissed
    pub dismissed_at: Option<DateTimeUtc>,
    /// Optional free-text reason supplied at dismissal
    pub dismiss_reason: Option<String>,
}

/// Wishlist items have no table-level relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
