//! Periodic board regeneration.

use crate::server::ServerState;
use hexboard_core::Board;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

/// Regenerate the board every `period` and publish it, forever.
///
/// The first regeneration happens one full period after start-up, since the
/// server starts with a freshly generated board.
pub async fn run_ticker<R: Rng>(state: Arc<ServerState>, mut rng: R, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;

    loop {
        ticker.tick().await;
        info!("updating board...");
        state.publish(Board::generate(&mut rng)).await;
    }
}
