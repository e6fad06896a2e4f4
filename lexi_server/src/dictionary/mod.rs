//! Upstream dictionary lookups.
//!
//! Entry payloads come from an upstream dictionary API and verb
//! inflections from a separate wiki endpoint. Both go through the TTL
//! cache; inflections are best effort and degrade to an empty list.

mod client;
mod service;

pub use client::HttpFetcher;
pub use service::DictionaryService;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("entry not found")]
    NotFound,

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Transient failures worth a retry. 404 and other client errors
    /// are final.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Status(code) => *code == 429 || *code >= 500,
            _ => false,
        }
    }
}

/// The dictionary variants the API exposes, keyed by URL slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    EnglishUk,
    EnglishChineseTraditional,
    EnglishChineseSimplified,
}

impl Language {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "en" => Some(Language::English),
            "uk" => Some(Language::EnglishUk),
            "en-tw" => Some(Language::EnglishChineseTraditional),
            "en-cn" => Some(Language::EnglishChineseSimplified),
            _ => None,
        }
    }

    /// Upstream path segment for this variant.
    pub fn path(self) -> &'static str {
        match self {
            Language::English => "us/dictionary/english",
            Language::EnglishUk => "uk/dictionary/english",
            Language::EnglishChineseTraditional => "us/dictionary/english-chinese-traditional",
            Language::EnglishChineseSimplified => "us/dictionary/english-chinese-simplified",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub pos: Vec<String>,
    #[serde(default)]
    pub verbs: Vec<VerbForm>,
    #[serde(default)]
    pub pronunciation: Vec<Pronunciation>,
    #[serde(default)]
    pub definition: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbForm {
    pub id: u32,
    #[serde(rename = "type")]
    pub form_type: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pronunciation {
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub pron: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub id: u32,
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub source: String,
    pub text: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub example: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub translation: String,
}

/// Abstraction over the upstream HTTP calls, so the service can be
/// exercised without a network.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_entry(&self, url: &str) -> FetchResult<DictionaryEntry>;
    async fn fetch_inflections(&self, url: &str) -> FetchResult<Vec<VerbForm>>;
}

/// Reduce a headword to the single token the inflection endpoint
/// understands. Placeholder tokens like "sth" and "sb" in phrasal
/// entries are dropped first.
pub fn normalize_for_inflection(entry: &str) -> String {
    entry
        .split_whitespace()
        .find(|token| {
            !matches!(
                token.to_ascii_lowercase().as_str(),
                "sth" | "sb" | "sth/sb" | "sb/sth" | "swh"
            )
        })
        .unwrap_or(entry)
        .to_string()
}
