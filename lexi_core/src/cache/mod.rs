//! Response caching for outbound dictionary fetches
//!
//! A process-wide key/value store with per-entry expiry. Entries are
//! idempotent re-derivations of the same fetch, so the cache is strictly
//! best-effort: absence always means "perform the underlying operation",
//! never an error.

use chrono::{DateTime, Utc};
use std::time::Duration;

pub mod memory;

pub use memory::TtlCache;

/// Cache key derived deterministically from a request identity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Canonicalize an identity string (typically a URL) into a key.
    ///
    /// Every non-alphanumeric character collapses to `_`, so the same
    /// logical identity always maps to the same key.
    pub fn derive(identity: &str) -> Self {
        let normalized: String = identity
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        Self(format!("cache_{normalized}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// TTL class of an entry.
///
/// The TTL is a property of the cache category, not of the entry:
/// page lookups use the default class, rarely-changing sub-resources
/// (verb inflections) use the long-lived class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtlClass {
    Default,
    LongLived,
}

/// A stored value with its insertion timestamp
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<V> {
    pub value: V,
    pub stored_at: DateTime<Utc>,
    pub class: TtlClass,
}

/// Cache statistics
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub entry_count: usize,
    pub hit_count: u64,
    pub miss_count: u64,
    pub expired_count: u64,
}

/// Configuration for the TTL cache
#[derive(Debug, Clone)]
pub struct TtlCacheConfig {
    /// TTL for the default class
    pub default_ttl: Duration,
    /// TTL for the long-lived class
    pub long_lived_ttl: Duration,
    /// Soft capacity bound; exceeding it triggers a full expired sweep
    pub capacity: usize,
    /// Period of the background sweep task
    pub sweep_interval: Duration,
}

impl Default for TtlCacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: Duration::from_secs(30 * 60),
            long_lived_ttl: Duration::from_secs(60 * 60),
            capacity: 1000,
            sweep_interval: Duration::from_secs(60 * 60),
        }
    }
}

impl TtlCacheConfig {
    pub(crate) fn ttl_for(&self, class: TtlClass) -> Duration {
        match class {
            TtlClass::Default => self.default_ttl,
            TtlClass::LongLived => self.long_lived_ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key_normalizes_urls() {
        let key = CacheKey::derive("https://dictionary.example.org/en/look-up");
        assert_eq!(
            key.as_str(),
            "cache_https___dictionary_example_org_en_look_up"
        );
    }

    #[test]
    fn test_derive_key_is_deterministic() {
        let a = CacheKey::derive("https://example.org/word?x=1");
        let b = CacheKey::derive("https://example.org/word?x=1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_key_distinguishes_identities() {
        let a = CacheKey::derive("https://example.org/cat");
        let b = CacheKey::derive("https://example.org/car");
        assert_ne!(a, b);
    }
}
