//! Error types for the model gateway

use thiserror::Error;

use crate::config::ConfigError;

/// Boxed cause of a transport failure
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur when calling the chat-completion API
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Required configuration is missing; no request was sent
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request never produced an HTTP response (DNS, connect, I/O)
    #[error("request to model API failed: {0}")]
    Transport(#[source] BoxError),

    /// Non-success status; the raw body is kept for diagnostics
    #[error("API error: {body}")]
    Upstream { status: u16, body: String },

    /// The response body is not the expected JSON shape
    #[error("failed to decode model response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The model returned zero choices
    #[error("no response from the model")]
    EmptyResponse,
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport(Box::new(err))
    }
}
