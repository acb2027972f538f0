//! Reward entity - An immutable ledger entry for points and badge grants.
//!
//! The ledger is append-only: rewards are never mutated or deleted. `points`
//! is set for point grants, `badge_id` for badge grants. `source` tags where
//! the grant came from (`"wishlist_add"`, `"wishlist_dismiss"`,
//! `"cooldown_complete"`, `"level_up"`, `"badge_earned"`, ...).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::RewardKind;

/// Reward ledger database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rewards")]
pub struct Model {
    /// Unique identifier for the ledger entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user id
    pub user_id: String,
    /// Entry kind (points or badge)
    pub kind: RewardKind,
    /// Points granted, when `kind` is points
    pub points: Option<i64>,
    /// Badge granted, when `kind` is badge
    pub badge_id: Option<String>,
    /// When the reward was earned
    pub earned_at: DateTimeUtc,
    /// Human-readable description shown in the rewards feed
    pub description: String,
    /// Which engine action produced this entry
    pub source: String,
}

/// Rewards have no table-level relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
