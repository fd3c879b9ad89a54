//! Dashboard poller
//!
//! Refreshes dashboard data on a fixed interval, but only while the
//! dashboard section is the active one.

use std::sync::Arc;
use std::time::Duration;
use tokio::time;
use tracing::debug;

use crate::backend::Backend;
use crate::controller::DashboardController;

/// Spawns the background polling task
///
/// The returned handle is aborted at application shutdown.
pub fn spawn<B: Backend + 'static>(
    controller: Arc<DashboardController<B>>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        // The first tick fires immediately; skip it so startup output stays clean.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            match controller.poll_tick() {
                Some(rendered) => {
                    debug!("dashboard refreshed by poller");
                    println!("\n{}", rendered);
                }
                None => debug!("dashboard inactive, skipping refresh"),
            }
        }
    })
}
