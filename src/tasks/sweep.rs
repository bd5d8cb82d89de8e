//! Cache Sweep Task
//!
//! Background task that periodically removes stale response cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::ResponseCache;

/// Shortest sweep period; a zero interval sweeps at this rate.
pub const MIN_SWEEP_PERIOD: Duration = Duration::from_millis(1);

// == Sweep Handle ==
/// Lifetime handle for a running sweep task.
///
/// Dropping the handle cancels the task.
#[derive(Debug)]
pub struct SweepHandle {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl SweepHandle {
    /// Cancels the task and waits for it to finish.
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            // A cancelled sweep exits its loop normally
            let _ = handle.await;
        }
        info!("Cache sweep task stopped");
    }

    /// Returns true once the task has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for SweepHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Spawns a background task that sweeps `cache` once per cache interval.
///
/// The first sweep happens one full interval after the call. Each sweep
/// takes the cache lock once and removes every entry created before
/// `now - interval`.
///
/// # Example
/// ```ignore
/// let cache = ResponseCache::new(Duration::from_secs(5));
/// let sweeper = spawn_sweep_task(cache.clone());
/// // Later, when the session ends:
/// sweeper.stop().await;
/// ```
pub fn spawn_sweep_task(cache: ResponseCache) -> SweepHandle {
    let period = cache.interval().max(MIN_SWEEP_PERIOD);
    let token = CancellationToken::new();
    let cancelled = token.clone();

    let handle = tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} ms",
            cache.interval().as_millis()
        );

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancelled.cancelled() => break,
                _ = ticker.tick() => {
                    let removed = cache.sweep().await;
                    if removed > 0 {
                        info!("Cache sweep: removed {} stale entries", removed);
                    } else {
                        debug!("Cache sweep: no stale entries found");
                    }
                }
            }
        }
    });

    SweepHandle {
        token,
        handle: Some(handle),
    }
}
