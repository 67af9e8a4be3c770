//! Hexboard server: regenerates the board on a timer and pushes it to
//! every connected websocket client.

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod server;
mod ticker;

use config::ServerConfig;
use hexboard_core::Board;
use server::ServerState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    info!("Starting Hexboard server with {:?}", config);

    let mut rng = config.rng();
    let board = Board::generate(&mut rng)?;
    let state = Arc::new(ServerState::new(board));

    tokio::spawn(ticker::run_ticker(
        Arc::clone(&state),
        rng,
        config.tick_interval,
    ));

    server::run_server(config.addr, state).await
}
