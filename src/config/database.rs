//! Database configuration module for `ImpulseBuddy`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{AdhdTaxItem, Purchase, Reward, UserBadge, UserProfile, WishlistItem};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Default `SQLite` location when no `DATABASE_URL` is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/impulse_buddy.sqlite?mode=rwc";

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database at the given URL.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation. It creates tables for wishlist items, purchases, ADHD-tax
/// items, rewards, user profiles, and earned badges, skipping any that already exist.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = vec![
        schema.create_table_from_entity(WishlistItem),
        schema.create_table_from_entity(Purchase),
        schema.create_table_from_entity(AdhdTaxItem),
        schema.create_table_from_entity(Reward),
        schema.create_table_from_entity(UserProfile),
        schema.create_table_from_entity(UserBadge),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(builder.build(statement)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        adhd_tax_item::Model as AdhdTaxItemModel, purchase::Model as PurchaseModel,
        reward::Model as RewardModel, user_badge::Model as UserBadgeModel,
        user_profile::Model as UserProfileModel, wishlist_item::Model as WishlistItemModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<WishlistItemModel> = WishlistItem::find().limit(1).all(&db).await?;
        let _: Vec<PurchaseModel> = Purchase::find().limit(1).all(&db).await?;
        let _: Vec<AdhdTaxItemModel> = AdhdTaxItem::find().limit(1).all(&db).await?;
        let _: Vec<RewardModel> = Reward::find().limit(1).all(&db).await?;
        let _: Vec<UserProfileModel> = UserProfile::find().limit(1).all(&db).await?;
        let _: Vec<UserBadgeModel> = UserBadge::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<WishlistItemModel> = WishlistItem::find().limit(1).all(&db).await?;
        Ok(())
    }
}
