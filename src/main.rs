use std::process;
use std::sync::Arc;

use line_ai_relay::channel::LineClient;
use line_ai_relay::config::Config;
use line_ai_relay::llm::OpenRouterClient;
use line_ai_relay::routes::configure_routes;
use line_ai_relay::state::AppState;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Variables already present in the environment take precedence
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(
        Arc::new(OpenRouterClient::new(&config)),
        Arc::new(LineClient::new(config.channel_token.clone())),
        config.channel_secret.clone(),
    ));
    let routes = configure_routes(state);

    info!("Server starting on port {}", config.port);
    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;
}
