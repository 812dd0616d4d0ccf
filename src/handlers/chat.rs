// POST /chat handler

use crate::models::{ChatRequest, ChatResponse};
use crate::state::AppState;
use bytes::Bytes;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{error, info};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

pub async fn chat_handler(body: Bytes, state: Arc<AppState>) -> Result<Response, Infallible> {
    let request: ChatRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            info!("POST /chat: rejected body: {}", e);
            return Ok(
                warp::reply::with_status(e.to_string(), StatusCode::BAD_REQUEST).into_response(),
            );
        }
    };

    info!("POST /chat: {} bytes", request.message.len());

    match state.model.complete(&request.message).await {
        Ok(response) => Ok(warp::reply::with_status(
            warp::reply::json(&ChatResponse { response }),
            StatusCode::OK,
        )
        .into_response()),
        Err(e) => {
            error!("POST /chat: model call failed: {}", e);
            Ok(warp::reply::with_status(
                format!("Error calling AI API: {}", e),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
            .into_response())
        }
    }
}
