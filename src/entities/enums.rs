//! Closed enums shared across entities, stored as strings in the database.
//!
//! Each enum derives `DeriveActiveEnum` so `SeaORM` maps it to a string column
//! while the Rust side stays a closed set. The `string_value` spellings are
//! the wire format used everywhere (database, API JSON, insight context).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a wishlist item.
///
/// Transitions are strictly `CoolingDown -> ReadyToReview -> {Purchased |
/// Dismissed}`; the two final states are terminal.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum WishlistStatus {
    /// Waiting out the mandatory cooldown period
    #[sea_orm(string_value = "cooling_down")]
    CoolingDown,
    /// Cooldown elapsed; the item may be purchased or dismissed
    #[sea_orm(string_value = "ready_to_review")]
    ReadyToReview,
    /// Converted into a purchase (terminal)
    #[sea_orm(string_value = "purchased")]
    Purchased,
    /// Resisted and dismissed (terminal)
    #[sea_orm(string_value = "dismissed")]
    Dismissed,
}

impl WishlistStatus {
    /// Whether the item has reached a final state and can never re-enter
    /// the cooldown lifecycle.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Purchased | Self::Dismissed)
    }
}

/// Spending category attached to wishlist items, purchases, and tax items.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum PurchaseCategory {
    #[sea_orm(string_value = "electronics")]
    Electronics,
    #[sea_orm(string_value = "clothing")]
    Clothing,
    #[sea_orm(string_value = "food")]
    Food,
    #[sea_orm(string_value = "entertainment")]
    Entertainment,
    #[sea_orm(string_value = "home")]
    Home,
    #[sea_orm(string_value = "transportation")]
    Transportation,
    #[sea_orm(string_value = "health")]
    Health,
    #[sea_orm(string_value = "subscription")]
    Subscription,
    #[sea_orm(string_value = "other")]
    Other,
}

/// Mood recorded when an item was added or a purchase was made.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum MoodTag {
    #[sea_orm(string_value = "happy")]
    Happy,
    #[sea_orm(string_value = "stressed")]
    Stressed,
    #[sea_orm(string_value = "bored")]
    Bored,
    #[sea_orm(string_value = "sad")]
    Sad,
    #[sea_orm(string_value = "frustrated")]
    Frustrated,
    #[sea_orm(string_value = "excited")]
    Excited,
    #[sea_orm(string_value = "anxious")]
    Anxious,
    #[sea_orm(string_value = "neutral")]
    Neutral,
}

/// Kind of avoidable cost tracked in the ADHD-tax ledger.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum AdhdTaxKind {
    #[sea_orm(string_value = "late_fee")]
    LateFee,
    #[sea_orm(string_value = "unused_subscription")]
    UnusedSubscription,
    #[sea_orm(string_value = "impulse_return")]
    ImpulseReturn,
    #[sea_orm(string_value = "overdraft")]
    Overdraft,
    #[sea_orm(string_value = "duplicate")]
    Duplicate,
    #[sea_orm(string_value = "expedited_shipping")]
    ExpeditedShipping,
    #[sea_orm(string_value = "lost_item")]
    LostItem,
    #[sea_orm(string_value = "forgotten_appointment")]
    ForgottenAppointment,
    #[sea_orm(string_value = "other")]
    Other,
}

/// Kind of entry in the append-only reward ledger.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    /// A points grant (`points` is set)
    #[sea_orm(string_value = "points")]
    Points,
    /// A badge grant (`badge_id` is set)
    #[sea_orm(string_value = "badge")]
    Badge,
    /// A level-up marker
    #[sea_orm(string_value = "level_up")]
    LevelUp,
}
