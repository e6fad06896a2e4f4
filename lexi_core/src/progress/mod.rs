//! Per-item learning progress
//!
//! One `ItemProgress` record exists per learnable item, created on the
//! first attempt and mutated on every recorded attempt and completed
//! review. `mastery_score` and `status` are derived fields: every
//! mutation funnels through [`ItemProgress::recompute_derived`] so they
//! can never drift out of sync with the attempt counters.

use crate::level::Level;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

pub mod store;

pub use store::{JsonProgressStore, MemoryProgressStore, ProgressStore};

/// Mastery threshold above which an item can be marked mastered
pub const MASTERY_THRESHOLD: f64 = 0.8;
/// Minimum completed review cycles before an item can be mastered
pub const MASTERY_MIN_REVIEWS: u32 = 3;

/// Categorical difficulty tag, derived from the most recent rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTag {
    Easy,
    Medium,
    Hard,
}

/// Learning status; recomputed, never independently settable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Learning,
    Mastered,
}

/// Progress state for one learnable item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemProgress {
    /// Display form of the item (base word or grammar guideword)
    pub word: String,
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub status: ItemStatus,
    pub first_learned: DateTime<Utc>,
    pub last_reviewed: DateTime<Utc>,
    /// When the item next becomes due
    pub next_review: DateTime<Utc>,
    /// Completed spaced-repetition cycles, distinct from raw attempts
    pub review_count: u32,
    pub difficulty: DifficultyTag,
    pub correct_count: u32,
    pub incorrect_count: u32,
    /// correct / (correct + incorrect), in [0, 1]
    pub mastery_score: f64,
    /// Clamped to [1.3, 2.5] on every review
    pub ease_factor: f64,
    /// Days until the next scheduled review
    pub current_interval: u32,
}

impl ItemProgress {
    /// Create the initial state for an item's first attempt
    pub fn new(word: impl Into<String>, level: Level, now: DateTime<Utc>) -> Self {
        Self {
            word: word.into(),
            level,
            topic: None,
            status: ItemStatus::Learning,
            first_learned: now,
            last_reviewed: now,
            next_review: now + TimeDelta::days(1),
            review_count: 0,
            difficulty: DifficultyTag::Medium,
            correct_count: 0,
            incorrect_count: 0,
            mastery_score: 0.0,
            ease_factor: 1.0,
            current_interval: 1,
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Total raw attempts recorded against this item
    pub fn attempts(&self) -> u32 {
        self.correct_count + self.incorrect_count
    }

    /// Accuracy over all attempts, absent when there is no data yet
    pub fn accuracy(&self) -> Option<f64> {
        let attempts = self.attempts();
        if attempts == 0 {
            None
        } else {
            Some(f64::from(self.correct_count) / f64::from(attempts))
        }
    }

    /// Record one answer and recompute the derived fields
    pub fn record_attempt(&mut self, correct: bool) {
        if correct {
            self.correct_count += 1;
        } else {
            self.incorrect_count += 1;
        }
        self.recompute_derived();
    }

    /// Recompute `mastery_score` and `status` from the attempt counters.
    ///
    /// The single place mastery and status are derived; both the
    /// attempt-recording and review-rating paths call this.
    pub fn recompute_derived(&mut self) {
        self.mastery_score = self.accuracy().unwrap_or(0.0);
        self.status = if self.mastery_score >= MASTERY_THRESHOLD
            && self.review_count >= MASTERY_MIN_REVIEWS
        {
            ItemStatus::Mastered
        } else {
            ItemStatus::Learning
        };
    }

    /// Whole days since the last review, floored at zero
    pub fn days_since_review(&self, now: DateTime<Utc>) -> i64 {
        now.signed_duration_since(self.last_reviewed).num_days().max(0)
    }

    /// Whether the item is eligible for the due list
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now && self.status != ItemStatus::Mastered
    }
}

/// Aggregate study statistics maintained alongside the item map
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyStats {
    pub learned_words: usize,
    pub mastered_words: usize,
    /// Consecutive study days
    pub streak: u32,
    pub last_study_date: Option<NaiveDate>,
}

impl StudyStats {
    /// Refresh the item-derived counters
    pub fn refresh_counts<'a>(&mut self, items: impl Iterator<Item = &'a ItemProgress>) {
        let mut learned = 0;
        let mut mastered = 0;
        for item in items {
            learned += 1;
            if item.status == ItemStatus::Mastered {
                mastered += 1;
            }
        }
        self.learned_words = learned;
        self.mastered_words = mastered;
    }

    /// Advance the study streak for activity on `today`.
    ///
    /// Same-day activity is a no-op; studying on consecutive days grows
    /// the streak; any gap resets it to one.
    pub fn record_study_day(&mut self, today: NaiveDate) {
        match self.last_study_date {
            Some(last) if last == today => {}
            Some(last) if last.succ_opt() == Some(today) => self.streak += 1,
            _ => self.streak = 1,
        }
        self.last_study_date = Some(today);
    }
}
