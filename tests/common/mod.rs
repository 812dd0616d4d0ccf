#![allow(dead_code)]

use async_trait::async_trait;
use line_ai_relay::channel::{sign, ChannelClient, ChannelError};
use line_ai_relay::llm::{ChatModel, GatewayError};
use line_ai_relay::routes::configure_routes;
use line_ai_relay::state::AppState;
use std::sync::{Arc, Mutex};
use warp::Filter;

/// Channel secret used by every test server
pub const CHANNEL_SECRET: &str = "test-channel-secret";

type Responder = dyn Fn(&str) -> Result<String, GatewayError> + Send + Sync;

/// Model stub that records every prompt and answers through a closure
pub struct StubModel {
    responder: Box<Responder>,
    calls: Mutex<Vec<String>>,
}

impl StubModel {
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&str) -> Result<String, GatewayError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Echoes the prompt back with a prefix
    pub fn echo() -> Arc<Self> {
        Self::new(|message| Ok(format!("echo: {}", message)))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for StubModel {
    async fn complete(&self, message: &str) -> Result<String, GatewayError> {
        self.calls.lock().unwrap().push(message.to_string());
        (self.responder)(message)
    }
}

/// Channel stub that records replies; tokens listed in `failing` error out
#[derive(Default)]
pub struct RecordingChannel {
    failing: Vec<String>,
    replies: Mutex<Vec<(String, String)>>,
}

impl RecordingChannel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_for(tokens: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            failing: tokens.iter().map(|t| t.to_string()).collect(),
            replies: Mutex::new(Vec::new()),
        })
    }

    /// Successfully delivered `(reply_token, text)` pairs, in order
    pub fn replies(&self) -> Vec<(String, String)> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChannelClient for RecordingChannel {
    async fn reply(&self, reply_token: &str, text: &str) -> Result<(), ChannelError> {
        if self.failing.iter().any(|t| t == reply_token) {
            return Err(ChannelError::Api {
                status: 400,
                body: "Invalid reply token".to_string(),
            });
        }
        self.replies
            .lock()
            .unwrap()
            .push((reply_token.to_string(), text.to_string()));
        Ok(())
    }
}

/// Build the full route tree over the given stubs
pub fn routes(
    model: Arc<StubModel>,
    channel: Arc<RecordingChannel>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    configure_routes(Arc::new(AppState::new(model, channel, CHANNEL_SECRET)))
}

/// A LINE text message event
pub fn text_event(reply_token: &str, text: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "message",
        "mode": "active",
        "timestamp": 1462629479859u64,
        "source": { "type": "user", "userId": "U4af4980629" },
        "replyToken": reply_token,
        "message": { "id": "325708", "type": "text", "text": text }
    })
}

/// Serialize a webhook body around `events` and sign it
pub fn signed_body(events: Vec<serde_json::Value>) -> (Vec<u8>, String) {
    let body = serde_json::to_vec(&serde_json::json!({
        "destination": "Uxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx",
        "events": events
    }))
    .unwrap();
    let signature = sign(CHANNEL_SECRET, &body).unwrap();
    (body, signature)
}
