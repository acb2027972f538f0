//! AI insight proxy - prompt assembly and the upstream completion client.
//!
//! This layer has no domain logic of its own: it serializes a snapshot of
//! the user's tracked data into a textual context and forwards it, together
//! with the chat history, to a third-party completion API.

/// Upstream completion client and conversation filtering
pub mod client;
/// Snapshot loading and context/prompt rendering
pub mod context;

pub use client::{ChatMessage, ChatRole, InsightClient, InsightReply};
pub use context::{UserSnapshot, load_snapshot, system_prompt};
