//! ADHD-tax item entity - A recorded avoidable-cost event.
//!
//! Late fees, unused subscriptions, expedited shipping and the like. Items
//! are deletable; deletion reverses their contribution to the running
//! `adhd_tax_total` on the user profile.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{AdhdTaxKind, PurchaseCategory};

/// ADHD-tax item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "adhd_tax_items")]
pub struct Model {
    /// Unique identifier for the tax item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user id
    pub user_id: String,
    /// What kind of avoidable cost this was
    pub kind: AdhdTaxKind,
    /// Amount lost (always positive)
    pub amount: f64,
    /// Human-readable description of the event
    pub description: String,
    /// When the cost was incurred
    pub date: DateTimeUtc,
    /// Optional spending category
    pub category: Option<PurchaseCategory>,
    /// Free-text notes
    pub notes: Option<String>,
}

/// ADHD-tax items have no table-level relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
