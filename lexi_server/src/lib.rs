//! HTTP layer for the lexi vocabulary app.
//!
//! Serves the static vocabulary and grammar datasets, proxies dictionary
//! lookups through a TTL cache, and exposes the review scheduler from
//! `lexi_core` over REST.

pub mod config;
pub mod dataset;
pub mod dictionary;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ConfigManager};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
