//! Cache-Aware Fetch Wrapper Module
//!
//! The single read entry point for every data store. Wraps a
//! [`CacheStore`] with the "return cached value or invoke the fetcher and
//! populate" flow that was previously copy-pasted per entity, and adds
//! single-flight de-duplication so concurrent reads of the same expired key
//! share one fetch instead of issuing a thundering herd of duplicates.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::timeout;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore, MAX_KEY_LENGTH};
use crate::config::CacheConfig;
use crate::error::{FetchError, FetchResult};

// == Fetch Cache ==
/// Read-through cache handle shared by the data stores of one entity family.
///
/// Cloning is cheap and clones share the same underlying store, so a UI
/// state container and the mutation path that invalidates for it can each
/// hold their own handle. Construct one per entity family and inject it;
/// the store is never a module-level singleton.
#[derive(Debug)]
pub struct FetchCache<V> {
    /// Shared TTL store
    store: Arc<RwLock<CacheStore<V>>>,
    /// Per-key gates de-duplicating concurrent fetches
    in_flight: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
    /// Optional upper bound on a single fetcher invocation
    fetch_timeout: Option<Duration>,
}

impl<V> Clone for FetchCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            in_flight: Arc::clone(&self.in_flight),
            fetch_timeout: self.fetch_timeout,
        }
    }
}

impl<V: Clone> FetchCache<V> {
    // == Constructor ==
    /// Creates a new FetchCache with an empty store and no fetch timeout.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new())),
            in_flight: Arc::new(Mutex::new(HashMap::new())),
            fetch_timeout: None,
        }
    }

    /// Creates a new FetchCache from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        let mut cache = Self::new();
        cache.fetch_timeout = config.fetch_timeout_secs.map(Duration::from_secs);
        cache
    }

    /// Sets an upper bound on a single fetcher invocation.
    ///
    /// A fetcher that exceeds it fails the call with
    /// [`FetchError::Timeout`]; nothing is cached.
    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = Some(fetch_timeout);
        self
    }

    // == Get Or Populate ==
    /// Returns the cached value for `key`, or invokes `fetcher` and caches
    /// its result for `ttl_seconds`.
    ///
    /// On a hit the fetcher is never invoked and the store is not mutated.
    /// On a miss (absent or expired) the fetcher runs at most once across
    /// all concurrent callers of the same key: latecomers wait on a per-key
    /// gate and pick up the winner's freshly stored value.
    ///
    /// A fetcher failure is propagated unchanged as [`FetchError::Fetch`];
    /// the failure is never cached and any previous (possibly stale) entry
    /// is left in place for the next attempt.
    ///
    /// # Arguments
    /// * `key` - Non-empty cache key, at most [`MAX_KEY_LENGTH`] bytes
    /// * `ttl_seconds` - TTL in seconds, must be > 0
    /// * `fetcher` - Async operation producing the authoritative value;
    ///   must be safe to call repeatedly (reads only)
    pub async fn get_or_populate<E, F, Fut>(
        &self,
        key: &str,
        ttl_seconds: u64,
        fetcher: F,
    ) -> FetchResult<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if key.is_empty() {
            return Err(FetchError::InvalidKey("key must not be empty".to_string()));
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(FetchError::InvalidKey(format!(
                "key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }
        if ttl_seconds == 0 {
            return Err(FetchError::InvalidTtl(ttl_seconds));
        }

        // Fast path: fresh entry already cached, zero I/O.
        if let Some(value) = self.store.write().await.get_fresh(key) {
            return Ok(value);
        }

        // Miss or expired: concurrent callers of the same key queue on one
        // gate so only the first of them reaches the fetcher.
        let gate = {
            let mut in_flight = self.in_flight.lock().await;
            Arc::clone(in_flight.entry(key.to_string()).or_default())
        };
        let _guard = gate.lock().await;

        // A caller that held the gate before us may have already
        // repopulated the entry. Stats were recorded on the first pass.
        if let Some(value) = self.store.read().await.peek_fresh(key) {
            return Ok(value);
        }

        debug!("Cache miss for key '{}', invoking fetcher", key);

        let outcome = match self.fetch_timeout {
            Some(limit) => match timeout(limit, fetcher()).await {
                Ok(result) => result.map_err(FetchError::Fetch),
                Err(_) => Err(FetchError::Timeout(limit)),
            },
            None => fetcher().await.map_err(FetchError::Fetch),
        };

        match outcome {
            Ok(value) => {
                // Store the value before releasing the gate entry so a
                // newcomer arriving in between either fast-path hits or
                // queues behind us and hits on its re-check. Removing the
                // entry first would let it fetch redundantly.
                self.store
                    .write()
                    .await
                    .set(key.to_string(), value.clone(), ttl_seconds);
                let mut in_flight = self.in_flight.lock().await;
                in_flight.remove(key);
                Ok(value)
            }
            Err(err) => {
                // After a failure the key is still unpopulated, so retries
                // must keep queuing on this gate: dropping the entry while
                // waiters hold it would let a newcomer fetch concurrently
                // with a waiter's retry. Only the last caller standing
                // removes the entry, so a failed fetch never blocks future
                // attempts and never breaks the one-fetch-per-key bound.
                let mut in_flight = self.in_flight.lock().await;
                if Arc::strong_count(&gate) <= 2 {
                    in_flight.remove(key);
                }
                Err(err)
            }
        }
    }

    // == Insert ==
    /// Primes the cache directly, overwriting any existing entry.
    ///
    /// Used by mutation paths that already hold the fresh value and by tests.
    pub async fn insert(&self, key: impl Into<String>, value: V, ttl_seconds: u64) {
        self.store.write().await.set(key.into(), value, ttl_seconds);
    }

    // == Invalidate ==
    /// Removes a single entry so the next read is forced to refetch.
    ///
    /// Returns true if an entry was removed; invalidating an absent key is
    /// a no-op.
    pub async fn invalidate(&self, key: &str) -> bool {
        let removed = self.store.write().await.delete(key);
        if removed {
            debug!("Invalidated cache key '{}'", key);
        }
        removed
    }

    // == Invalidate Prefix ==
    /// Removes every entry whose key starts with `prefix`, clearing all
    /// paginated/filtered variants of a list in one call.
    ///
    /// Returns the number of entries removed.
    ///
    /// Invalidation is manual and enumerated by the mutation call site; a
    /// derived key the call site does not know about stays stale until its
    /// TTL expires.
    pub async fn invalidate_prefix(&self, prefix: &str) -> usize {
        let removed = self.store.write().await.delete_prefix(prefix);
        if removed > 0 {
            debug!("Invalidated {} cache keys with prefix '{}'", removed, prefix);
        }
        removed
    }

    // == Clear ==
    /// Removes every entry. Mainly for test isolation and session resets.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Store Handle ==
    /// Shared handle to the underlying store, used by the cleanup task.
    pub(crate) fn store_handle(&self) -> Arc<RwLock<CacheStore<V>>> {
        Arc::clone(&self.store)
    }
}

impl<V: Clone> Default for FetchCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
