use std::sync::Arc;

use mock_bot_api::{BotState, DEFAULT_TOKEN};
use tokio::{net::TcpListener, sync::RwLock};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8081".to_string());
    let token = std::env::var("BOT_TOKEN").unwrap_or_else(|_| DEFAULT_TOKEN.to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "mock Bot API listening");
    mock_bot_api::run_with_state(listener, Arc::new(RwLock::new(BotState::new(&token)))).await
}
