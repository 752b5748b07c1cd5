//! Cache Store Module
//!
//! Process-local key/value storage with TTL expiration. One store instance
//! is constructed per entity family (products, categories, brands, ...) and
//! injected into whatever layer reads through it; there is no module-level
//! singleton, so tests and multiple storefront instances stay isolated.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// In-memory mapping from string key to TTL-tagged value.
///
/// All operations are synchronous and infallible: a lookup on an absent or
/// expired key returns `None` rather than an error, and deleting an absent
/// key is a no-op. Callers are expected to re-fetch on any `None`.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new empty CacheStore.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    // == Has ==
    /// Returns true iff an entry exists for `key`, regardless of expiry.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Get ==
    /// Returns the raw entry (value + expiry metadata) or `None` if absent.
    ///
    /// The entry may already be expired; use [`get_fresh`](Self::get_fresh)
    /// for the combined presence-and-expiry check every read path should use.
    pub fn get(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    // == Get Fresh ==
    /// Returns the value for `key` only if present and unexpired.
    ///
    /// An expired entry is removed lazily and counted as a miss, so the
    /// presence check and the expiry check can never diverge at a call site.
    pub fn get_fresh(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek Fresh ==
    /// Like [`get_fresh`](Self::get_fresh) but without touching stats or
    /// removing expired entries. Used for the post-gate re-check in the fetch
    /// wrapper, where the first pass already recorded the miss.
    pub fn peek_fresh(&self, key: &str) -> Option<V> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone())
    }

    // == Set ==
    /// Stores a key-value pair, overwriting any existing entry and resetting
    /// its TTL.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl_seconds` - TTL in seconds
    pub fn set(&mut self, key: String, value: V, ttl_seconds: u64) {
        let entry = CacheEntry::new(value, ttl_seconds);
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Delete ==
    /// Removes an entry unconditionally.
    ///
    /// Returns true if an entry was removed. Deleting an absent key is a
    /// no-op, not an error.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.record_invalidations(1);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Delete Prefix ==
    /// Removes every entry whose key starts with `prefix`.
    ///
    /// List caches key each page/filter combination separately
    /// (`products_<page>_<filters>`), so a mutation must clear the whole
    /// family rather than guess at individual keys.
    ///
    /// Returns the number of entries removed.
    pub fn delete_prefix(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - self.entries.len();

        if removed > 0 {
            self.stats.record_invalidations(removed as u64);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();

        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Clear ==
    /// Removes every entry. Expiry sweeps and invalidation stats are not
    /// affected; this is a full reset of the stored data only.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
