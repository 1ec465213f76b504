//! Background scheduler for the daily portfolio snapshot sweep.

use std::sync::Arc;
use tokio::time::{interval, Duration};
use tracing::{info, warn};

use crate::main_lib::AppState;

/// Sweep interval: once a day.
const SNAPSHOT_INTERVAL_SECS: u64 = 24 * 60 * 60;

/// Initial delay before the first sweep (60 seconds to let the server fully
/// start).
const INITIAL_DELAY_SECS: u64 = 60;

/// Starts the background snapshot scheduler.
pub fn start_snapshot_scheduler(state: Arc<AppState>) {
    tokio::spawn(async move {
        info!("Snapshot scheduler started (daily interval)");

        tokio::time::sleep(Duration::from_secs(INITIAL_DELAY_SECS)).await;

        let mut tick = interval(Duration::from_secs(SNAPSHOT_INTERVAL_SECS));
        loop {
            tick.tick().await;
            match state.performance_service.record_all_snapshots().await {
                Ok(written) => info!("Snapshot sweep complete: {} users", written),
                Err(e) => warn!("Snapshot sweep failed: {}", e),
            }
        }
    });
}
