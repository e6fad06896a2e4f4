//! Due-list selection and priority ranking
//!
//! An item is due when its next review time has passed and it is not
//! mastered. Due items are ranked most-overdue first, breaking ties in
//! favor of lower mastery.

use crate::progress::{DifficultyTag, ItemProgress};
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// A due item with its computed ranking inputs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DueItem {
    pub item_id: String,
    pub days_overdue: i64,
    /// Scalar priority for callers that want a single number instead of
    /// the composite sort key
    pub priority: f64,
    #[serde(flatten)]
    pub progress: ItemProgress,
}

/// The priority-ordered review queue
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewQueue {
    pub items: Vec<DueItem>,
}

impl ReviewQueue {
    /// Build the queue from the full item map.
    ///
    /// Mastered items are excluded from the due list even when their
    /// next review time has passed.
    pub fn build(items: &HashMap<String, ItemProgress>, now: DateTime<Utc>) -> Self {
        let mut due: Vec<DueItem> = items
            .iter()
            .filter(|(_, progress)| progress.is_due(now))
            .map(|(item_id, progress)| {
                let days_overdue = days_overdue(progress, now);
                DueItem {
                    item_id: item_id.clone(),
                    days_overdue,
                    priority: priority_score(progress, days_overdue),
                    progress: progress.clone(),
                }
            })
            .collect();

        due.sort_by(|a, b| {
            b.days_overdue.cmp(&a.days_overdue).then(
                a.progress
                    .mastery_score
                    .total_cmp(&b.progress.mastery_score),
            )
        });

        Self { items: due }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Whole days past the scheduled review time, floored at zero
pub fn days_overdue(progress: &ItemProgress, now: DateTime<Utc>) -> i64 {
    now.signed_duration_since(progress.next_review)
        .num_days()
        .max(0)
}

/// Scalar review priority: overdue dominates, hard items and low
/// mastery push an item further forward.
pub fn priority_score(progress: &ItemProgress, days_overdue: i64) -> f64 {
    let mut priority = days_overdue as f64 * 10.0;
    if progress.difficulty == DifficultyTag::Hard {
        priority += 5.0;
    }
    priority + (1.0 - progress.mastery_score) * 3.0
}

/// Predicted number of items coming due on each of the next `days_ahead` days
pub fn forecast(
    items: &HashMap<String, ItemProgress>,
    now: DateTime<Utc>,
    days_ahead: u32,
) -> Vec<(NaiveDate, usize)> {
    (0..days_ahead)
        .map(|offset| {
            let date = (now + TimeDelta::days(i64::from(offset))).date_naive();
            let count = items
                .values()
                .filter(|p| p.next_review.date_naive() == date)
                .count();
            (date, count)
        })
        .collect()
}

/// Items per day needed to cover `total_items` in `target_days`
pub fn daily_goal(total_items: usize, target_days: u32) -> usize {
    if target_days == 0 {
        return total_items;
    }
    total_items.div_ceil(target_days as usize)
}
