// POST /callback handler (LINE webhook)

use crate::channel::{parse_request, ChannelError, Event};
use crate::state::AppState;
use bytes::Bytes;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use warp::http::StatusCode;

pub async fn callback_handler(
    signature: Option<String>,
    body: Bytes,
    state: Arc<AppState>,
) -> Result<StatusCode, Infallible> {
    let events = match parse_request(&state.channel_secret, signature.as_deref(), &body) {
        Ok(events) => events,
        Err(ChannelError::InvalidSignature) => {
            warn!("POST /callback: invalid signature");
            return Ok(StatusCode::BAD_REQUEST);
        }
        Err(e) => {
            error!("POST /callback: {}", e);
            return Ok(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    info!("POST /callback: {} event(s)", events.len());

    // Events are handled one at a time, in delivery order
    for event in &events {
        let Some((reply_token, text)) = event.as_text_message() else {
            debug!("skipping {}", kind(event));
            continue;
        };

        let response = match state.model.complete(text).await {
            Ok(response) => response,
            Err(e) => {
                error!("Error calling OpenRouter API: {}", e);
                continue;
            }
        };

        // Standby-mode events carry no reply token
        let Some(reply_token) = reply_token else {
            warn!("Error sending response to LINE: event has no reply token");
            continue;
        };

        if let Err(e) = state.channel.reply(reply_token, &response).await {
            error!("Error sending response to LINE: {}", e);
        }
    }

    Ok(StatusCode::OK)
}

fn kind(event: &Event) -> &'static str {
    match event {
        Event::Message { .. } => "non-text message",
        Event::Other => "non-message event",
    }
}
