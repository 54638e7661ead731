//! Expiry Sweep Task
//!
//! Background task that periodically removes expired response-cache items,
//! bounding memory growth from keys that are written once and never read
//! again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ResponseCache;

/// Spawns a background task that periodically sweeps expired items from the
/// response cache.
///
/// The task loops for the lifetime of the process, sleeping for the
/// configured interval between sweeps and taking a write lock only for the
/// duration of each sweep. The returned JoinHandle is the cancellation
/// point: graceful shutdown aborts it, and tests can abort it to terminate
/// the sweep deterministically.
///
/// # Arguments
/// * `cache` - Shared response cache to sweep
/// * `sweep_interval_secs` - Interval in seconds between sweeps
pub fn spawn_sweep_task<T>(
    cache: Arc<RwLock<ResponseCache<T>>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
{
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup()
            };

            if removed > 0 {
                info!("Expiry sweep: removed {} expired items", removed);
            } else {
                debug!("Expiry sweep: no expired items found");
            }
        }
    })
}
