//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment
//! variables, plus the per-entity TTLs observed at the storefront's call
//! sites.

use std::env;

// == Per-Entity TTLs ==
/// TTL for catalog entities (categories, brands, suppliers), in seconds.
pub const TTL_CATALOG: u64 = 120;

/// TTL for paginated/filtered product lists, in seconds.
pub const TTL_PRODUCT_LISTS: u64 = 300;

/// TTL for product variants, which change rarely, in seconds.
pub const TTL_VARIANTS: u64 = 960;

// == Cache Config ==
/// Cache layer configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Optional upper bound on a single fetcher invocation, in seconds
    pub fetch_timeout_secs: Option<u64>,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval_secs: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_FETCH_TIMEOUT` - Fetch timeout in seconds (default: none)
    /// - `CACHE_CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            fetch_timeout_secs: env::var("CACHE_FETCH_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok()),
            cleanup_interval_secs: env::var("CACHE_CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: None,
            cleanup_interval_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.fetch_timeout_secs, None);
        assert_eq!(config.cleanup_interval_secs, 60);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_FETCH_TIMEOUT");
        env::remove_var("CACHE_CLEANUP_INTERVAL");

        let config = CacheConfig::from_env();
        assert_eq!(config.fetch_timeout_secs, None);
        assert_eq!(config.cleanup_interval_secs, 60);
    }
}
