//! LINE Messaging API channel
//!
//! Webhook signature verification, the inbound event model, and the reply
//! client used to answer text messages.

pub mod client;
pub mod error;
pub mod events;
pub mod signature;

pub use client::{ChannelClient, LineClient, LINE_REPLY_URL};
pub use error::ChannelError;
pub use events::{parse_request, Event, EventMessage, WebhookPayload};
pub use signature::{sign, verify_signature, SIGNATURE_HEADER};
