//! Core business logic - framework-agnostic domain operations.
//!
//! Everything here works against a `SeaORM` connection and returns plain
//! models; nothing depends on the HTTP layer. The wishlist module owns the
//! cooldown lifecycle, rewards owns points/levels/badges, and the remaining
//! modules keep their aggregates on the user profile in step.

/// ADHD-tax ledger operations
pub mod adhd_tax;
/// Static badge catalogue (read-only reference data)
pub mod badges;
/// User profile and settings management
pub mod profile;
/// Purchase history operations
pub mod purchases;
/// Points, leveling, and badge grants
pub mod rewards;
/// Wishlist cooldown state machine
pub mod wishlist;
