//! Unified error types and result handling.
//!
//! Every fallible operation in the crate returns [`Result`], built on a single
//! [`Error`] enum. Validation failures are rejected before any state mutation;
//! store failures bubble up from `SeaORM`; insight-proxy failures carry the
//! upstream status so the API layer can surface them without affecting the
//! rest of the application.

use thiserror::Error;

/// Unified error type for all `ImpulseBuddy` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or input validation error with a human-readable message
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what was invalid
        message: String,
    },

    /// A monetary amount or point value that is zero, negative, or not finite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// Wishlist item lookup failed for an id that no longer exists
    #[error("Wishlist item {id} not found")]
    WishlistItemNotFound {
        /// The missing item id
        id: i64,
    },

    /// A purchase or dismiss action was attempted on an item that has not
    /// finished its cooldown (or is already terminal)
    #[error("Wishlist item {id} is not ready for review (status: {status})")]
    NotReadyForReview {
        /// The item id
        id: i64,
        /// The item's actual lifecycle status
        status: String,
    },

    /// ADHD-tax item lookup failed for an id that no longer exists
    #[error("ADHD tax item {id} not found")]
    TaxItemNotFound {
        /// The missing item id
        id: i64,
    },

    /// Unknown badge id passed to the rewards engine
    #[error("Unknown badge id: {badge_id}")]
    UnknownBadge {
        /// The id that matched no catalogue entry
        badge_id: String,
    },

    /// Database error from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// The insight proxy is not configured (missing API key)
    #[error("Insight API key not configured")]
    InsightNotConfigured,

    /// The insight request never reached the upstream completion API
    #[error("Insight request failed: {message}")]
    InsightRequest {
        /// Transport-level failure description
        message: String,
    },

    /// The upstream completion API answered with a non-success status
    #[error("Insight upstream error ({status}): {body}")]
    InsightUpstream {
        /// HTTP status returned by the completion API
        status: u16,
        /// Upstream response body, for diagnostics
        body: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
