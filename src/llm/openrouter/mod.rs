//! OpenRouter provider implementation
//!
//! This module provides a client for the OpenRouter chat-completion API and
//! the transport seam it sends requests through.

pub mod client;
pub mod transport;

// Re-export commonly used types
pub use client::{OpenRouterClient, OpenRouterModel, CLIENT_TITLE, OPENROUTER_URL};
pub use transport::{HttpTransport, OutboundRequest, RawResponse, Transport};
