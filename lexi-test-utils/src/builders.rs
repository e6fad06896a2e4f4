//! Builders for per-item progress state

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use lexi_core::level::Level;
use lexi_core::progress::ItemProgress;

/// Builder for `ItemProgress` test scenarios.
///
/// Starts from the first-attempt initial state and lets tests dial in
/// counters and timestamps; derived fields are recomputed on build.
pub struct ProgressBuilder {
    word: String,
    level: Level,
    topic: Option<String>,
    now: DateTime<Utc>,
    correct: u32,
    incorrect: u32,
    review_count: u32,
    ease_factor: f64,
    current_interval: u32,
    reviewed_days_ago: i64,
    due_days_ago: Option<i64>,
}

impl ProgressBuilder {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            level: Level::B1,
            topic: None,
            now: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            correct: 0,
            incorrect: 0,
            review_count: 0,
            ease_factor: 1.0,
            current_interval: 1,
            reviewed_days_ago: 0,
            due_days_ago: None,
        }
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn topic(mut self, topic: &str) -> Self {
        self.topic = Some(topic.to_string());
        self
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn counts(mut self, correct: u32, incorrect: u32) -> Self {
        self.correct = correct;
        self.incorrect = incorrect;
        self
    }

    pub fn reviews(mut self, review_count: u32) -> Self {
        self.review_count = review_count;
        self
    }

    pub fn ease(mut self, ease_factor: f64) -> Self {
        self.ease_factor = ease_factor;
        self
    }

    pub fn interval(mut self, days: u32) -> Self {
        self.current_interval = days;
        self
    }

    pub fn reviewed_days_ago(mut self, days: i64) -> Self {
        self.reviewed_days_ago = days;
        self
    }

    /// Make the item overdue by the given number of days
    pub fn overdue(mut self, days: i64) -> Self {
        self.due_days_ago = Some(days);
        self
    }

    pub fn build(self) -> ItemProgress {
        let mut progress = ItemProgress::new(self.word, self.level, self.now);
        if let Some(topic) = self.topic {
            progress = progress.with_topic(topic);
        }
        progress.correct_count = self.correct;
        progress.incorrect_count = self.incorrect;
        progress.review_count = self.review_count;
        progress.ease_factor = self.ease_factor;
        progress.current_interval = self.current_interval;
        progress.last_reviewed = self.now - TimeDelta::days(self.reviewed_days_ago);
        if let Some(days) = self.due_days_ago {
            progress.next_review = self.now - TimeDelta::days(days);
        }
        progress.recompute_derived();
        progress
    }
}
