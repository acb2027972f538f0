//! Shared test utilities for `ImpulseBuddy`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{adhd_tax, profile, purchases, wishlist},
    entities::{self, AdhdTaxKind, PurchaseCategory},
    errors::Result,
};
use sea_orm::{DatabaseConnection, EntityTrait};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds wishlist-item input with sensible defaults.
///
/// # Defaults
/// * `category`: electronics
/// * no tags, notes, or url
#[must_use]
pub fn test_wishlist_input(name: &str, price: f64) -> wishlist::NewWishlistItem {
    wishlist::NewWishlistItem {
        name: name.to_string(),
        price,
        category: PurchaseCategory::Electronics,
        mood_tag: None,
        context_tag: None,
        notes: None,
        url: None,
    }
}

/// Adds a wishlist item and fast-forwards it to `ready_to_review` by running
/// the release check at the item's own cooldown end.
pub async fn ready_test_item(
    db: &DatabaseConnection,
    user_id: &str,
    name: &str,
    price: f64,
) -> Result<entities::wishlist_item::Model> {
    let item = wishlist::add_item(db, user_id, test_wishlist_input(name, price)).await?;
    wishlist::release_expired(db, Some(user_id), item.cooldown_ends_at).await?;

    let refreshed = entities::WishlistItem::find_by_id(item.id)
        .one(db)
        .await?
        .unwrap();
    Ok(refreshed)
}

/// Sets the user's cooldown duration, creating the profile if needed.
pub async fn set_cooldown_hours(db: &DatabaseConnection, user_id: &str, hours: i32) -> Result<()> {
    profile::update_settings(
        db,
        user_id,
        profile::SettingsUpdate {
            cooldown_hours: Some(hours),
            ..Default::default()
        },
    )
    .await?;
    Ok(())
}

/// Builds purchase input with sensible defaults.
///
/// # Defaults
/// * `category`: food
/// * `was_impulse`: false
/// * no tags or notes
#[must_use]
pub fn test_purchase(name: &str, amount: f64) -> purchases::NewPurchase {
    purchases::NewPurchase {
        name: name.to_string(),
        amount,
        category: PurchaseCategory::Food,
        was_impulse: false,
        mood_tag: None,
        context_tag: None,
        notes: None,
    }
}

/// Builds ADHD-tax input with sensible defaults.
///
/// # Defaults
/// * `kind`: late fee
/// * no category or notes
#[must_use]
pub fn test_tax_input(description: &str, amount: f64) -> adhd_tax::NewAdhdTaxItem {
    adhd_tax::NewAdhdTaxItem {
        kind: AdhdTaxKind::LateFee,
        amount,
        description: description.to_string(),
        category: None,
        notes: None,
    }
}
