// Shared handler state

use std::sync::Arc;

use crate::channel::ChannelClient;
use crate::llm::ChatModel;

/// Read-only dependencies shared by every request
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ChatModel>,
    pub channel: Arc<dyn ChannelClient>,
    pub channel_secret: String,
}

impl AppState {
    pub fn new(
        model: Arc<dyn ChatModel>,
        channel: Arc<dyn ChannelClient>,
        channel_secret: impl Into<String>,
    ) -> Self {
        Self {
            model,
            channel,
            channel_secret: channel_secret.into(),
        }
    }
}
