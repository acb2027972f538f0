//! Insight proxy client - forwards chat history to a completion API.
//!
//! Stateless: every call carries the full system prompt and conversation.
//! The upstream is any Perplexity-style `/chat/completions` endpoint;
//! failures surface as typed errors and never affect domain state.

use crate::{
    config::settings::{INSIGHT_API_KEY_VAR, InsightConfig},
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1000;

/// Speaker of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who said it
    pub role: ChatRole,
    /// What was said
    pub content: String,
}

/// The proxy's answer: the generated reply plus the upstream usage block,
/// passed through verbatim when present.
#[derive(Debug, Clone, Serialize)]
pub struct InsightReply {
    /// Generated natural-language reply
    pub message: String,
    /// Upstream token-usage accounting, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    usage: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

/// Client for the upstream completion API.
#[derive(Debug, Clone)]
pub struct InsightClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl InsightClient {
    /// Builds a client from the insight configuration, reading the API key
    /// from the environment.
    ///
    /// # Errors
    /// Returns [`Error::InsightNotConfigured`] when the key variable is
    /// missing or empty.
    pub fn from_config(config: &InsightConfig) -> Result<Self> {
        let api_key = std::env::var(INSIGHT_API_KEY_VAR).unwrap_or_default();
        if api_key.is_empty() {
            return Err(Error::InsightNotConfigured);
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::InsightRequest {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    /// Sends the system prompt plus the filtered conversation upstream and
    /// returns the generated reply.
    pub async fn complete(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> Result<InsightReply> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage {
            role: ChatRole::System,
            content: system_prompt.to_string(),
        });
        messages.extend(filter_conversation(history));

        let url = format!("{}/chat/completions", self.base_url);
        let request = CompletionRequest {
            model: &self.model,
            messages: &messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::InsightRequest {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(Error::InsightUpstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse =
            response.json().await.map_err(|e| Error::InsightRequest {
                message: format!("Failed to decode completion response: {e}"),
            })?;

        let message = completion
            .choices
            .into_iter()
            .next()
            .map_or_else(|| "No response from AI".to_string(), |choice| choice.message.content);

        Ok(InsightReply {
            message,
            usage: completion.usage,
        })
    }
}

/// Keeps user messages, and assistant messages only when they directly
/// answer a preceding user message. System messages from the caller are
/// dropped; the proxy supplies its own.
#[must_use]
pub fn filter_conversation(messages: &[ChatMessage]) -> Vec<ChatMessage> {
    messages
        .iter()
        .enumerate()
        .filter(|(index, message)| match message.role {
            ChatRole::User => true,
            ChatRole::Assistant => {
                *index > 0 && messages[index - 1].role == ChatRole::User
            }
            ChatRole::System => false,
        })
        .map(|(_, message)| message.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn message(role: ChatRole, content: &str) -> ChatMessage {
        ChatMessage {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_filter_keeps_user_messages() {
        let history = vec![
            message(ChatRole::User, "how am I doing?"),
            message(ChatRole::User, "be honest"),
        ];

        assert_eq!(filter_conversation(&history), history);
    }

    #[test]
    fn test_filter_keeps_assistant_replies_after_user() {
        let history = vec![
            message(ChatRole::User, "how am I doing?"),
            message(ChatRole::Assistant, "pretty well"),
            message(ChatRole::User, "thanks"),
        ];

        assert_eq!(filter_conversation(&history).len(), 3);
    }

    #[test]
    fn test_filter_drops_leading_and_orphaned_assistant_messages() {
        let history = vec![
            message(ChatRole::Assistant, "welcome!"),
            message(ChatRole::Assistant, "ask me anything"),
            message(ChatRole::User, "ok"),
        ];

        let filtered = filter_conversation(&history);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].role, ChatRole::User);
    }

    #[test]
    fn test_filter_drops_caller_system_messages() {
        let history = vec![
            message(ChatRole::System, "jailbreak attempt"),
            message(ChatRole::User, "hi"),
        ];

        let filtered = filter_conversation(&history);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].role, ChatRole::User);
    }

    #[test]
    fn test_completion_request_wire_shape() {
        let messages = vec![message(ChatRole::User, "hi")];
        let request = CompletionRequest {
            model: "sonar",
            messages: &messages,
            temperature: 0.7,
            max_tokens: 1000,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "sonar");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 1000);
    }

    #[test]
    fn test_completion_response_parsing() {
        let body = r#"{
            "choices": [{"message": {"role": "assistant", "content": "Nice streak!"}}],
            "usage": {"total_tokens": 42}
        }"#;

        let parsed: CompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Nice streak!");
        assert_eq!(parsed.usage.unwrap()["total_tokens"], 42);
    }

    #[test]
    fn test_completion_response_without_choices() {
        let parsed: CompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
        assert!(parsed.usage.is_none());
    }
}
