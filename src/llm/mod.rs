//! Model Gateway
//!
//! This module provides a single-turn interface to a hosted chat-completion
//! API. Adapters depend on the [`ChatModel`] trait; [`OpenRouterClient`] is
//! the production implementation.

pub mod core;
pub mod openrouter;

// Re-export commonly used types
pub use self::core::{
    error::GatewayError,
    provider::ChatModel,
    types::{ChatMessage, MessageRole, ModelRequest, ModelResponse},
};

pub use self::openrouter::{HttpTransport, OpenRouterClient, OpenRouterModel, Transport};
