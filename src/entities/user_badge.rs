//! User badge entity - Which catalogue badges a user has earned.
//!
//! Membership is monotonic: rows are inserted when a badge is first earned
//! and never removed. The badge definitions themselves live in the static
//! catalogue, not in the database.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Earned-badge database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_badges")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user id
    pub user_id: String,
    /// Catalogue id of the earned badge (e.g. `"saver-supreme"`)
    pub badge_id: String,
    /// When the badge was earned
    pub earned_at: DateTimeUtc,
}

/// User badges have no table-level relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
