//! Cache Module
//!
//! Provides in-memory caching with TTL expiration, a cache-aware fetch
//! wrapper with single-flight de-duplication, and explicit invalidation.

pub(crate) mod entry;
mod fetch;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use fetch::FetchCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes.
///
/// List keys embed serialized filter objects, so the bound is generous, but
/// a runaway key usually means a caller serialized a whole payload by
/// mistake.
pub const MAX_KEY_LENGTH: usize = 256;
