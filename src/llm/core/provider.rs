//! Provider trait for chat-completion backends

use async_trait::async_trait;

use super::error::GatewayError;

/// Single-turn chat completion
///
/// Implementations send `message` as the only user turn and return the text
/// of the first completion verbatim. Every call is independent: no history,
/// no retries.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, message: &str) -> Result<String, GatewayError>;
}
