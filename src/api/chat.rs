//! Insight chat endpoint - the stateless AI proxy.
//!
//! Assembles the user's snapshot from the store, renders the coaching
//! prompt, and forwards it with the conversation to the upstream completion
//! API. Failures here are non-fatal to everything else; they surface as a
//! single error response on this route.

use crate::{
    ai::{self, ChatMessage, InsightReply},
    api::{AppState, UserId},
    errors::{Error, Result},
};
use axum::{Json, extract::State};
use serde::Deserialize;

/// Chat request: the conversation so far.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Message history; must be non-empty
    pub messages: Vec<ChatMessage>,
}

/// `POST /api/chat` - generate an insight reply over the user's own data.
pub async fn chat(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(request): Json<ChatRequest>,
) -> Result<Json<InsightReply>> {
    if request.messages.is_empty() {
        return Err(Error::Config {
            message: "Messages array is required".to_string(),
        });
    }

    let client = state.insight.as_ref().ok_or(Error::InsightNotConfigured)?;

    let snapshot = ai::load_snapshot(&state.db, &user_id).await?;
    let prompt = ai::system_prompt(&snapshot);
    let reply = client.complete(&prompt, &request.messages).await?;

    Ok(Json(reply))
}
