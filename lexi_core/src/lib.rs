//! Lexi Core Library
//!
//! This is the core library for the lexi vocabulary server, providing the
//! TTL response cache, the spaced-repetition review scheduler, per-item
//! progress tracking and adaptive difficulty selection.

pub mod cache;
pub mod clock;
pub mod difficulty;
pub mod error;
pub mod level;
pub mod progress;
pub mod srs;

// Re-export main types
pub use cache::{CacheKey, CacheStats, TtlCache, TtlCacheConfig, TtlClass};
pub use clock::{Clock, SystemClock};
pub use difficulty::{
    DifficultyScorer, RecentPerformance, SelectionStrategy, WeakAreaReport, target_difficulty,
};
pub use error::{Error, Result};
pub use level::Level;
pub use progress::{
    DifficultyTag, ItemProgress, ItemStatus, JsonProgressStore, MemoryProgressStore,
    ProgressStore, StudyStats,
};
pub use srs::{Rating, ReviewQueue};
