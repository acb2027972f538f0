//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod adhd_tax_item;
pub mod enums;
pub mod purchase;
pub mod reward;
pub mod user_badge;
pub mod user_profile;
pub mod wishlist_item;

// Re-export specific types to avoid conflicts
pub use adhd_tax_item::{
    Column as AdhdTaxItemColumn, Entity as AdhdTaxItem, Model as AdhdTaxItemModel,
};
pub use enums::{AdhdTaxKind, MoodTag, PurchaseCategory, RewardKind, WishlistStatus};
pub use purchase::{Column as PurchaseColumn, Entity as Purchase, Model as PurchaseModel};
pub use reward::{Column as RewardColumn, Entity as Reward, Model as RewardModel};
pub use user_badge::{Column as UserBadgeColumn, Entity as UserBadge, Model as UserBadgeModel};
pub use user_profile::{
    Column as UserProfileColumn, Entity as UserProfile, Model as UserProfileModel, UserSettings,
    UserStats,
};
pub use wishlist_item::{
    Column as WishlistItemColumn, Entity as WishlistItem, Model as WishlistItemModel,
};
