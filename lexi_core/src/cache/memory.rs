//! In-memory TTL cache
//!
//! This module provides the in-memory cache used to avoid redundant
//! outbound fetches, with lazy read-time expiry, a capacity-triggered
//! sweep on insert and an optional periodic background sweep.

use crate::cache::{CacheEntry, CacheKey, CacheStats, TtlCacheConfig, TtlClass};
use crate::clock::{Clock, SystemClock};
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::interval;

/// Process-wide TTL cache for fetch payloads
///
/// Cloning is cheap and shares the underlying map, so the server can
/// hand one instance to request handlers and the sweeper task alike.
pub struct TtlCache<V> {
    entries: Arc<RwLock<HashMap<CacheKey, CacheEntry<V>>>>,
    stats: Arc<RwLock<CacheStats>>,
    config: TtlCacheConfig,
    clock: Arc<dyn Clock>,
    shutdown: Arc<RwLock<bool>>,
}

impl<V> Clone for TtlCache<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            stats: self.stats.clone(),
            config: self.config.clone(),
            clock: self.clock.clone(),
            shutdown: self.shutdown.clone(),
        }
    }
}

impl<V: Clone + Send + Sync + 'static> TtlCache<V> {
    /// Create a cache with the given configuration and the system clock
    pub fn new(config: TtlCacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a cache with an injected clock (for tests)
    pub fn with_clock(config: TtlCacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            stats: Arc::new(RwLock::new(CacheStats::default())),
            config,
            clock,
            shutdown: Arc::new(RwLock::new(false)),
        }
    }

    /// Get a value if present and not expired.
    ///
    /// An expired entry is removed on read and reported as absent.
    pub async fn get(&self, key: &CacheKey) -> Option<V> {
        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        let mut stats = self.stats.write().await;

        match entries.get(key) {
            Some(entry) if !self.is_expired(entry, now) => {
                stats.hit_count += 1;
                Some(entry.value.clone())
            }
            Some(_) => {
                entries.remove(key);
                stats.expired_count += 1;
                stats.miss_count += 1;
                stats.entry_count = entries.len();
                None
            }
            None => {
                stats.miss_count += 1;
                None
            }
        }
    }

    /// Insert or overwrite a value, stamping it with the current time.
    ///
    /// When the entry count exceeds the soft capacity bound after the
    /// insert, every expired entry is swept out.
    pub async fn insert(&self, key: CacheKey, value: V, class: TtlClass) {
        let now = self.clock.now();
        let mut entries = self.entries.write().await;

        entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: now,
                class,
            },
        );

        let mut stats = self.stats.write().await;
        if entries.len() > self.config.capacity {
            let removed = self.sweep_locked(&mut entries, now);
            stats.expired_count += removed as u64;
        }
        stats.entry_count = entries.len();
    }

    /// Remove every expired entry, returning the number removed
    pub async fn sweep(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        let removed = self.sweep_locked(&mut entries, now);

        let mut stats = self.stats.write().await;
        stats.expired_count += removed as u64;
        stats.entry_count = entries.len();
        removed
    }

    /// Drop all entries
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
        let mut stats = self.stats.write().await;
        stats.entry_count = 0;
    }

    /// Current number of stored entries, expired or not
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Snapshot of cache statistics
    pub async fn stats(&self) -> CacheStats {
        self.stats.read().await.clone()
    }

    /// Spawn the periodic sweep task.
    ///
    /// Fire-and-forget: skipping or delaying a sweep has no correctness
    /// impact, it only bounds memory under low traffic.
    pub fn spawn_sweeper(&self) -> tokio::task::JoinHandle<()> {
        let cache = self.clone();
        let period = self.config.sweep_interval;

        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.tick().await; // first tick fires immediately
            loop {
                ticker.tick().await;
                if *cache.shutdown.read().await {
                    break;
                }
                let removed = cache.sweep().await;
                if removed > 0 {
                    log::debug!("cache sweep removed {removed} expired entries");
                }
            }
        })
    }

    /// Signal the sweeper task to exit on its next tick
    pub async fn stop_sweeper(&self) {
        *self.shutdown.write().await = true;
    }

    fn is_expired(&self, entry: &CacheEntry<V>, now: DateTime<Utc>) -> bool {
        let ttl = chrono_ttl(self.config.ttl_for(entry.class));
        now.signed_duration_since(entry.stored_at) >= ttl
    }

    fn sweep_locked(
        &self,
        entries: &mut HashMap<CacheKey, CacheEntry<V>>,
        now: DateTime<Utc>,
    ) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| !self.is_expired(entry, now));
        before - entries.len()
    }
}

fn chrono_ttl(ttl: Duration) -> TimeDelta {
    TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX)
}

// Expiry behavior needs a controllable clock and lives in
// tests/cache_ttl_tests.rs; only clock-free behavior is covered here.
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fresh_insert_roundtrip() {
        let cache: TtlCache<String> = TtlCache::new(TtlCacheConfig::default());

        let key = CacheKey::derive("https://example.org/word");
        cache
            .insert(key.clone(), "payload".to_string(), TtlClass::Default)
            .await;

        assert_eq!(cache.get(&key).await.as_deref(), Some("payload"));
        assert_eq!(cache.len().await, 1);

        cache.clear().await;
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_stats_track_hits_and_misses() {
        let cache: TtlCache<u32> = TtlCache::new(TtlCacheConfig::default());

        let key = CacheKey::derive("word");
        assert_eq!(cache.get(&key).await, None);
        cache.insert(key.clone(), 7, TtlClass::Default).await;
        assert_eq!(cache.get(&key).await, Some(7));

        let stats = cache.stats().await;
        assert_eq!(stats.hit_count, 1);
        assert_eq!(stats.miss_count, 1);
        assert_eq!(stats.entry_count, 1);
    }
}
