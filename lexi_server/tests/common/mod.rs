//! Common test utilities for the route integration tests.
//!
//! Builds a full router over the sample datasets, an in-memory progress
//! store, a manual clock and a canned dictionary fetcher, so tests can
//! drive the HTTP surface without a network or a filesystem.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

use lexi_core::clock::Clock;
use lexi_core::{MemoryProgressStore, ProgressStore, TtlCacheConfig};
use lexi_server::config::FetchConfig;
use lexi_server::dataset::Dataset;
use lexi_server::dictionary::{
    Definition, DictionaryEntry, DictionaryService, FetchError, FetchResult, Fetcher, VerbForm,
};
use lexi_server::{AppState, routes};
use lexi_test_utils::{ManualClock, sample_grammar_json, sample_vocabulary_json};

/// Canned fetcher that answers every entry except the ones listed as
/// missing, counting calls so tests can assert on cache behavior.
pub struct MockFetcher {
    pub missing: Vec<String>,
    pub entry_calls: AtomicUsize,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            missing: Vec::new(),
            entry_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_missing(words: &[&str]) -> Self {
        Self {
            missing: words.iter().map(|w| w.to_string()).collect(),
            entry_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch_entry(&self, url: &str) -> FetchResult<DictionaryEntry> {
        self.entry_calls.fetch_add(1, Ordering::SeqCst);
        let word = url.rsplit('/').next().unwrap_or_default().to_string();
        if self.missing.iter().any(|m| *m == word) {
            return Err(FetchError::NotFound);
        }
        Ok(DictionaryEntry {
            word: word.clone(),
            pos: vec!["verb".to_string()],
            verbs: Vec::new(),
            pronunciation: Vec::new(),
            definition: vec![Definition {
                id: 0,
                pos: "verb".to_string(),
                source: "test".to_string(),
                text: format!("definition of {word}"),
                translation: String::new(),
                example: Vec::new(),
            }],
        })
    }

    async fn fetch_inflections(&self, _url: &str) -> FetchResult<Vec<VerbForm>> {
        Ok(vec![VerbForm {
            id: 0,
            form_type: "Past tense".to_string(),
            text: "tested".to_string(),
        }])
    }
}

pub struct TestApp {
    pub router: Router,
    pub clock: Arc<ManualClock>,
    pub progress: Arc<MemoryProgressStore>,
}

pub fn test_app() -> TestApp {
    test_app_with(Arc::new(MockFetcher::new()))
}

pub fn test_app_with(fetcher: Arc<dyn Fetcher>) -> TestApp {
    let clock = Arc::new(ManualClock::default());
    let progress = Arc::new(MemoryProgressStore::new());

    let words = serde_json::from_str(&sample_vocabulary_json()).unwrap();
    let grammar = serde_json::from_str(&sample_grammar_json()).unwrap();
    let dataset = Arc::new(Dataset::new(words, grammar));

    let dictionary = Arc::new(DictionaryService::with_clock(
        fetcher,
        TtlCacheConfig::default(),
        &FetchConfig::default(),
        clock.clone() as Arc<dyn Clock>,
    ));

    let state = AppState::new(
        dataset,
        dictionary,
        progress.clone() as Arc<dyn ProgressStore>,
        clock.clone() as Arc<dyn Clock>,
    );

    TestApp {
        router: routes::router(state),
        clock,
        progress,
    }
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
