//! Wire types for the chat-completion API

use serde::{Deserialize, Serialize};

/// Request body for a chat completion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelRequest {
    /// Model identifier
    pub model: String,
    /// Conversation turns, oldest first
    pub messages: Vec<ChatMessage>,
}

impl ModelRequest {
    /// Build a request carrying exactly one user turn
    pub fn single_user(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(content)],
        }
    }
}

/// A single message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Plain text content
    pub content: String,
}

impl ChatMessage {
    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
}

/// Response body of a chat completion
///
/// Only `choices[n].message.content` is read; everything else the API
/// returns is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// May be `null` upstream; read as empty text
    #[serde(default)]
    pub content: Option<String>,
}

impl ModelResponse {
    /// Text of the first choice, if there is one
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
    }
}
