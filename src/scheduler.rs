//! Background refresh of every topic: once at startup, then on a fixed interval.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::refresh::Refresher;

pub struct Scheduler {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Scheduler {
    /// Spawns the refresh task. With `run_timer` off only the startup refresh
    /// runs and later refreshes are left to an external trigger.
    pub fn spawn(refresher: Arc<Refresher>, run_timer: bool) -> Self {
        let token = CancellationToken::new();
        let handle = tokio::spawn(run(refresher, run_timer, token.clone()));

        Self { token, handle }
    }

    /// Stops the task and waits for it to exit.
    pub async fn shutdown(self) {
        self.token.cancel();
        if let Err(e) = self.handle.await {
            error!("scheduler task failed: {}", e);
        }
        debug!("scheduler stopped");
    }
}

async fn run(refresher: Arc<Refresher>, run_timer: bool, token: CancellationToken) {
    tokio::select! {
        _ = refresher.refresh_all() => info!("cache initialised"),
        _ = token.cancelled() => return,
    }

    if !run_timer {
        return;
    }

    let period = refresher.interval();
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                info!("scheduled refresh starting");
                refresher.refresh_all().await;
            }
            _ = token.cancelled() => break,
        }
    }
}
