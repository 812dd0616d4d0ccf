//! Inbound webhook event model

use serde::Deserialize;

use super::error::ChannelError;
use super::signature::verify_signature;

/// Webhook request body
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    /// User ID of the bot that should receive the events
    #[serde(default)]
    pub destination: Option<String>,
    /// Events in delivery order
    pub events: Vec<Event>,
}

/// A single webhook event
///
/// Only message events are modelled; follow, postback, join and every other
/// kind collapse into [`Event::Other`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    Message {
        /// Absent for events delivered to a channel in standby mode
        #[serde(rename = "replyToken", default)]
        reply_token: Option<String>,
        message: EventMessage,
    },
    #[serde(other)]
    Other,
}

/// Content of a message event
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EventMessage {
    Text { text: String },
    #[serde(other)]
    Other,
}

impl Event {
    /// Reply token (if any) and text, when this is a text message event
    pub fn as_text_message(&self) -> Option<(Option<&str>, &str)> {
        match self {
            Event::Message {
                reply_token,
                message: EventMessage::Text { text },
            } => Some((reply_token.as_deref(), text.as_str())),
            _ => None,
        }
    }
}

/// Verify the signature of a webhook body and decode its events
///
/// Signature problems are reported as [`ChannelError::InvalidSignature`]
/// before the body is looked at.
pub fn parse_request(
    channel_secret: &str,
    signature: Option<&str>,
    body: &[u8],
) -> Result<Vec<Event>, ChannelError> {
    match signature {
        Some(signature) if verify_signature(channel_secret, body, signature) => {}
        _ => return Err(ChannelError::InvalidSignature),
    }

    let payload: WebhookPayload = serde_json::from_slice(body)?;
    Ok(payload.events)
}
