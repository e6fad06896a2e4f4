//! Adaptive difficulty
//!
//! Scores items on a 1..10 scale from their CEFR level and review
//! history, tracks recent performance over a rolling window, and
//! derives a target difficulty used by the adaptive selection strategy.

use crate::level::Level;
use crate::progress::ItemProgress;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::collections::HashMap;

pub mod analysis;
pub mod selection;

pub use analysis::{WeakAreaReport, WeakGroup, WeakItem, analyze_weak_areas};
pub use selection::{ScoredItem, SelectionStrategy, select_batch};

/// Bounds of the per-item difficulty score
pub const SCORE_MIN: f64 = 1.0;
pub const SCORE_MAX: f64 = 10.0;

/// Bounds of the adaptive target difficulty
pub const TARGET_MIN: f64 = 3.0;
pub const TARGET_MAX: f64 = 8.0;

/// Length of the recent-performance window in days
pub const WINDOW_DAYS: i64 = 7;

/// Per-item difficulty scorer.
///
/// Kept as a unit struct so callers hold one and pass it around the
/// selection path rather than re-importing free functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DifficultyScorer;

impl DifficultyScorer {
    /// Difficulty score for an item: level weight as the base, adjusted
    /// by accuracy, review count and recency, clamped to [1, 10].
    ///
    /// An item the learner has never attempted scores its bare level
    /// weight.
    pub fn score(
        &self,
        level: Level,
        progress: Option<&ItemProgress>,
        now: DateTime<Utc>,
    ) -> f64 {
        let mut difficulty = f64::from(level.weight());

        if let Some(progress) = progress {
            if progress.attempts() >= 3 {
                // accuracy() is Some here since attempts >= 3
                let accuracy = progress.accuracy().unwrap_or(0.5);
                if accuracy > 0.8 {
                    difficulty += 0.5;
                } else if accuracy < 0.5 {
                    difficulty -= 0.5;
                }
            }

            if progress.review_count > 5 {
                difficulty += 0.3;
            } else if progress.review_count == 0 {
                difficulty -= 0.2;
            }

            let days_since = now
                .signed_duration_since(progress.last_reviewed)
                .num_seconds() as f64
                / 86_400.0;
            if days_since < 1.0 {
                difficulty -= 0.3;
            } else if days_since > 7.0 {
                difficulty += 0.3;
            }
        }

        difficulty.clamp(SCORE_MIN, SCORE_MAX)
    }
}

/// Rolling-window performance summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPerformance {
    /// Accuracy over the window; 0.5 neutral prior when no data
    pub accuracy: f64,
    /// Mean level-derived difficulty of reviewed items; 5.0 when empty
    pub average_difficulty: f64,
    pub total_attempts: u32,
}

impl RecentPerformance {
    /// Compute performance over items reviewed in the last 7 days
    pub fn compute(items: &HashMap<String, ItemProgress>, now: DateTime<Utc>) -> Self {
        let window_start = now - TimeDelta::days(WINDOW_DAYS);
        let mut total_correct: u32 = 0;
        let mut total_attempts: u32 = 0;
        let mut total_difficulty = 0.0;
        let mut count: u32 = 0;

        for progress in items.values() {
            if progress.last_reviewed > window_start && progress.attempts() > 0 {
                total_correct += progress.correct_count;
                total_attempts += progress.attempts();
                total_difficulty += f64::from(progress.level.weight());
                count += 1;
            }
        }

        Self {
            accuracy: if total_attempts > 0 {
                f64::from(total_correct) / f64::from(total_attempts)
            } else {
                0.5
            },
            average_difficulty: if count > 0 {
                total_difficulty / f64::from(count)
            } else {
                5.0
            },
            total_attempts,
        }
    }
}

/// Target difficulty from recent performance: step up above 80%
/// accuracy, step down below 60%, clamp to [3, 8].
pub fn target_difficulty(performance: &RecentPerformance) -> f64 {
    let mut target = performance.average_difficulty;
    if performance.accuracy > 0.8 {
        target += 1.0;
    } else if performance.accuracy < 0.6 {
        target -= 1.0;
    }
    target.clamp(TARGET_MIN, TARGET_MAX)
}
