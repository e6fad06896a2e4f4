//! Reqwest-backed fetcher with bounded retries.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::FetchConfig;
use crate::dictionary::{DictionaryEntry, FetchError, FetchResult, Fetcher, VerbForm};

pub struct HttpFetcher {
    client: reqwest::Client,
    retry_count: u32,
    initial_retry_delay: Duration,
    max_retry_delay: Duration,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            retry_count: config.retry_count,
            initial_retry_delay: Duration::from_millis(config.initial_retry_delay_ms),
            max_retry_delay: Duration::from_millis(config.max_retry_delay_ms),
        })
    }

    /// Exponential backoff: initial delay doubled per attempt, capped.
    fn retry_delay(&self, attempt: u32) -> Duration {
        let delay = self
            .initial_retry_delay
            .saturating_mul(2u32.saturating_pow(attempt));
        delay.min(self.max_retry_delay)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let mut attempt = 0;
        loop {
            match self.try_get(url).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt < self.retry_count => {
                    let delay = self.retry_delay(attempt);
                    log::warn!("fetch {url} failed ({err}), retrying in {delay:?}");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn try_get<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_entry(&self, url: &str) -> FetchResult<DictionaryEntry> {
        self.get_json(url).await
    }

    async fn fetch_inflections(&self, url: &str) -> FetchResult<Vec<VerbForm>> {
        self.get_json(url).await
    }
}
