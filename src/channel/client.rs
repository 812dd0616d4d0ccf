//! LINE reply client

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::error::ChannelError;

/// Reply API endpoint
pub const LINE_REPLY_URL: &str = "https://api.line.me/v2/bot/message/reply";

/// Sends replies back through the messaging channel
#[async_trait]
pub trait ChannelClient: Send + Sync {
    /// Answer the event identified by `reply_token` with a text message
    async fn reply(&self, reply_token: &str, text: &str) -> Result<(), ChannelError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: Vec<OutgoingMessage<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum OutgoingMessage<'a> {
    Text { text: &'a str },
}

/// Client for the LINE Messaging API reply endpoint
pub struct LineClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Channel access token
    channel_token: String,
    /// Reply API URL
    reply_url: String,
}

impl LineClient {
    pub fn new(channel_token: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            channel_token: channel_token.into(),
            reply_url: LINE_REPLY_URL.to_string(),
        }
    }

    /// Send replies to `reply_url` instead of the public API
    pub fn with_reply_url(mut self, reply_url: impl Into<String>) -> Self {
        self.reply_url = reply_url.into();
        self
    }
}

#[async_trait]
impl ChannelClient for LineClient {
    async fn reply(&self, reply_token: &str, text: &str) -> Result<(), ChannelError> {
        let request = ReplyRequest {
            reply_token,
            messages: vec![OutgoingMessage::Text { text }],
        };

        let response = self
            .http_client
            .post(&self.reply_url)
            .bearer_auth(&self.channel_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => format!("<failed to read response body: {}>", e),
            };
            return Err(ChannelError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!(reply_token, "reply sent");
        Ok(())
    }
}
