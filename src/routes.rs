// Route definitions and handlers

use crate::handlers;
use crate::state::AppState;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

pub fn configure_routes(
    state: Arc<AppState>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // POST /callback
    let callback = warp::path("callback")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::header::optional::<String>(crate::channel::SIGNATURE_HEADER))
        .and(warp::body::bytes())
        .and(with_state(state.clone()))
        .and_then(handlers::callback_handler);

    // POST /chat
    let chat = warp::path("chat")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::bytes())
        .and(with_state(state))
        .and_then(handlers::chat_handler);

    // Combine routes
    callback.or(chat)
}

fn with_state(
    state: Arc<AppState>,
) -> impl Filter<Extract = (Arc<AppState>,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}
