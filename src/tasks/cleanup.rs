//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.
//! Expiry is otherwise enforced lazily on access, so the sweep only bounds
//! the memory held by keys nobody reads anymore.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::FetchCache;

/// Spawns a background task that periodically sweeps expired entries out of
/// the cache.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It holds its own handle to the underlying store, so the
/// caller keeps full ownership of the `FetchCache`.
///
/// # Arguments
/// * `cache` - The cache to sweep
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during shutdown.
pub fn spawn_cleanup_task<V>(cache: &FetchCache<V>, cleanup_interval_secs: u64) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let store = cache.store_handle();
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and sweep expired entries
            let removed = {
                let mut store_guard = store.write().await;
                store_guard.cleanup_expired()
            };

            // Log cleanup statistics
            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
