//! Background tasks - the cooldown poller.
//!
//! Cooldown expiry is time-driven, not push-based: a periodic sweep moves
//! every elapsed `cooling_down` item to `ready_to_review`. The task runs for
//! the life of the process, independent of any request or UI state, so
//! expiry is evaluated consistently no matter what the client is doing.
//! Staleness of up to one interval is acceptable by design.

use crate::core::wishlist;
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// How often the cooldown sweep runs.
pub const COOLDOWN_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Spawns the cooldown poller: one immediate sweep, then one every interval.
///
/// Sweep failures are logged and the loop continues; nothing is retried
/// early. The returned handle can be used to abort the task on shutdown.
pub fn spawn_cooldown_poller(db: DatabaseConnection) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(COOLDOWN_POLL_INTERVAL);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            // The first tick completes immediately.
            interval.tick().await;

            match wishlist::release_expired(&db, None, chrono::Utc::now()).await {
                Ok(released) if !released.is_empty() => {
                    info!(count = released.len(), "released wishlist items from cooldown");
                }
                Ok(_) => {}
                Err(error) => {
                    error!(%error, "cooldown sweep failed");
                }
            }
        }
    })
}
