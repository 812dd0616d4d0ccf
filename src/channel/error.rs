//! Error types for the messaging channel

use thiserror::Error;

/// Errors raised while handling webhooks or sending replies
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Missing, malformed, or mismatched `x-line-signature`
    #[error("invalid signature")]
    InvalidSignature,

    /// The webhook body is not a valid event payload
    #[error("failed to parse webhook body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The reply request did not complete
    #[error("reply request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The reply API answered with a non-success status
    #[error("reply API error (status {status}): {body}")]
    Api { status: u16, body: String },
}
