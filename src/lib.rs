//! Storefront Cache - the in-memory TTL cache layer between the
//! storefront's data stores and its server actions.
//!
//! Consolidates the read-through caching that every entity data store
//! (products, categories, brands, suppliers, variants) needs into one
//! subsystem:
//!
//! - [`CacheStore`]: TTL-tagged key/value storage with lazy expiry
//! - [`FetchCache`]: get-or-populate wrapper with single-flight
//!   de-duplication of concurrent fetches
//! - [`keys`]: the key composition convention shared by all call sites
//! - [`spawn_cleanup_task`]: optional background expiry sweep
//!
//! The cache is process-local with no cross-process consistency; after a
//! mutation, call sites invalidate the affected keys explicitly. A derived
//! key a mutation path does not enumerate stays stale until its TTL expires.

pub mod cache;
pub mod config;
pub mod error;
pub mod keys;
pub mod tasks;

pub use cache::{CacheEntry, CacheStats, CacheStore, FetchCache, MAX_KEY_LENGTH};
pub use config::CacheConfig;
pub use error::{FetchError, FetchResult};
pub use tasks::spawn_cleanup_task;
