//! Error types for the cache layer
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Fetch Error Enum ==
/// Unified error type for cache-aware fetches.
///
/// `E` is the fetcher's own error type; it is carried unchanged so the
/// data-store caller can handle it exactly as it would without the cache
/// in between.
#[derive(Error, Debug)]
pub enum FetchError<E> {
    /// Empty or over-long cache key
    #[error("Invalid cache key: {0}")]
    InvalidKey(String),

    /// Zero TTL requested
    #[error("Invalid TTL: {0} seconds")]
    InvalidTtl(u64),

    /// Fetcher exceeded the configured timeout
    #[error("Fetch timed out after {0:?}")]
    Timeout(Duration),

    /// The underlying fetcher failed; nothing was cached
    #[error("Fetch failed: {0}")]
    Fetch(E),
}

// == Result Type Alias ==
/// Convenience Result type for cache-aware fetches.
pub type FetchResult<T, E> = std::result::Result<T, FetchError<E>>;

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let invalid_key: FetchError<String> =
            FetchError::InvalidKey("key must not be empty".to_string());
        assert_eq!(
            invalid_key.to_string(),
            "Invalid cache key: key must not be empty"
        );

        let invalid_ttl: FetchError<String> = FetchError::InvalidTtl(0);
        assert_eq!(invalid_ttl.to_string(), "Invalid TTL: 0 seconds");

        let fetch: FetchError<String> = FetchError::Fetch("database unavailable".to_string());
        assert_eq!(fetch.to_string(), "Fetch failed: database unavailable");
    }

    #[test]
    fn test_fetch_variant_carries_caller_error_unchanged() {
        let err: FetchError<&str> = FetchError::Fetch("connection refused");
        match err {
            FetchError::Fetch(inner) => assert_eq!(inner, "connection refused"),
            other => panic!("expected Fetch, got {:?}", other),
        }
    }
}
