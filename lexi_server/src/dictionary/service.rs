//! Cached dictionary lookup service.

use std::sync::Arc;

use lexi_core::clock::Clock;
use lexi_core::{CacheKey, CacheStats, TtlCache, TtlCacheConfig, TtlClass};

use crate::config::FetchConfig;
use crate::dictionary::{
    DictionaryEntry, FetchResult, Fetcher, Language, VerbForm, normalize_for_inflection,
};

pub struct DictionaryService {
    fetcher: Arc<dyn Fetcher>,
    entries: TtlCache<DictionaryEntry>,
    inflections: TtlCache<Vec<VerbForm>>,
    dictionary_base: String,
    inflection_base: String,
}

impl DictionaryService {
    pub fn new(fetcher: Arc<dyn Fetcher>, cache: TtlCacheConfig, fetch: &FetchConfig) -> Self {
        Self {
            fetcher,
            entries: TtlCache::new(cache.clone()),
            inflections: TtlCache::new(cache),
            dictionary_base: fetch.dictionary_base_url.trim_end_matches('/').to_string(),
            inflection_base: fetch.inflection_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Construct with an injected clock so tests can control expiry.
    pub fn with_clock(
        fetcher: Arc<dyn Fetcher>,
        cache: TtlCacheConfig,
        fetch: &FetchConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            fetcher,
            entries: TtlCache::with_clock(cache.clone(), clock.clone()),
            inflections: TtlCache::with_clock(cache, clock),
            dictionary_base: fetch.dictionary_base_url.trim_end_matches('/').to_string(),
            inflection_base: fetch.inflection_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Look up an entry, serving from cache when fresh.
    ///
    /// The entry payload and its inflection list are fetched
    /// concurrently on a miss. Inflection failures degrade to an empty
    /// list rather than failing the lookup.
    pub async fn lookup(&self, language: Language, entry: &str) -> FetchResult<DictionaryEntry> {
        let url = format!("{}/{}/{}", self.dictionary_base, language.path(), entry);
        let key = CacheKey::derive(&url);

        if let Some(hit) = self.entries.get(&key).await {
            log::debug!("dictionary cache hit for {url}");
            return Ok(hit);
        }

        let (fetched, verbs) = tokio::join!(
            self.fetcher.fetch_entry(&url),
            self.inflections_for(entry),
        );

        let mut resolved = fetched?;
        if resolved.verbs.is_empty() {
            resolved.verbs = verbs;
        }
        self.entries
            .insert(key, resolved.clone(), TtlClass::Default)
            .await;
        Ok(resolved)
    }

    /// Inflections are immutable upstream, so cache hits keep the
    /// long-lived TTL class.
    async fn inflections_for(&self, entry: &str) -> Vec<VerbForm> {
        let url = format!(
            "{}/{}",
            self.inflection_base,
            normalize_for_inflection(entry)
        );
        let key = CacheKey::derive(&url);

        if let Some(hit) = self.inflections.get(&key).await {
            return hit;
        }

        match self.fetcher.fetch_inflections(&url).await {
            Ok(verbs) => {
                self.inflections
                    .insert(key, verbs.clone(), TtlClass::LongLived)
                    .await;
                verbs
            }
            Err(err) => {
                log::debug!("inflection fetch for {url} failed: {err}");
                Vec::new()
            }
        }
    }

    pub fn spawn_sweepers(&self) -> Vec<tokio::task::JoinHandle<()>> {
        vec![self.entries.spawn_sweeper(), self.inflections.spawn_sweeper()]
    }

    pub async fn stop_sweepers(&self) {
        self.entries.stop_sweeper().await;
        self.inflections.stop_sweeper().await;
    }

    pub async fn stats(&self) -> (CacheStats, CacheStats) {
        (self.entries.stats().await, self.inflections.stats().await)
    }

    pub async fn clear(&self) {
        self.entries.clear().await;
        self.inflections.clear().await;
    }
}
