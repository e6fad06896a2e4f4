//! Spaced-repetition scheduling
//!
//! The transition function for one item: a rating drives the next
//! interval, the ease factor and the next review timestamp. All
//! operations are pure transformations over supplied state; the caller
//! owns persistence.
//!
//! The interval scales multiplicatively on every rating rather than
//! resetting to the rating's base interval. This compounds over many
//! reviews and is intentional; see the open-question notes in
//! DESIGN.md before changing it.

use crate::progress::{DifficultyTag, ItemProgress};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod queue;

pub use queue::{DueItem, ReviewQueue, daily_goal, forecast};

/// Lower bound of the ease factor domain
pub const EASE_MIN: f64 = 1.3;
/// Upper bound of the ease factor domain
pub const EASE_MAX: f64 = 2.5;

/// Longest interval the scheduler will assign, in days.
///
/// The multiplicative growth rule is unbounded on its own; without a
/// ceiling a long run of easy ratings pushes `next_review` past the
/// representable `DateTime` range.
pub const INTERVAL_MAX_DAYS: u32 = 3_650;

/// Review outcome rating.
///
/// Unrecognized labels deserialize as `Good`, falling back to the
/// 7-day base interval rather than producing undefined behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Again,
    Hard,
    Easy,
    #[serde(other)]
    Good,
}

impl FromStr for Rating {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "again" => Rating::Again,
            "hard" => Rating::Hard,
            "easy" => Rating::Easy,
            _ => Rating::Good,
        })
    }
}

/// Base interval in days for a first review at this rating
pub fn base_interval(rating: Rating) -> u32 {
    match rating {
        Rating::Again => 1,
        Rating::Hard => 3,
        Rating::Good => 7,
        Rating::Easy => 14,
    }
}

/// Multiplier applied to the current interval and ease factor
pub fn interval_multiplier(rating: Rating) -> f64 {
    match rating {
        Rating::Again => 0.8,
        Rating::Hard => 0.9,
        Rating::Good => 1.0,
        Rating::Easy => 1.3,
    }
}

/// Next interval in days: `round(current * multiplier * ease_modifier)`,
/// capped at [`INTERVAL_MAX_DAYS`].
pub fn next_interval(current: u32, rating: Rating, ease_modifier: f64) -> u32 {
    let days = (f64::from(current) * interval_multiplier(rating) * ease_modifier).round() as u32;
    days.min(INTERVAL_MAX_DAYS)
}

/// Next ease factor, clamped to [1.3, 2.5] on every computation
pub fn next_ease(current: f64, rating: Rating) -> f64 {
    (current * interval_multiplier(rating)).clamp(EASE_MIN, EASE_MAX)
}

/// Apply one rating to an item, using its stored ease factor as the
/// external ease modifier.
pub fn rate(progress: &mut ItemProgress, rating: Rating, now: DateTime<Utc>) {
    let modifier = progress.ease_factor;
    rate_with_modifier(progress, rating, modifier, now);
}

/// Apply one rating with an explicit ease modifier.
///
/// Advances interval, ease factor, next review time, review count and
/// the difficulty tag, then recomputes the derived fields.
pub fn rate_with_modifier(
    progress: &mut ItemProgress,
    rating: Rating,
    ease_modifier: f64,
    now: DateTime<Utc>,
) {
    let new_interval = next_interval(progress.current_interval, rating, ease_modifier);

    progress.ease_factor = next_ease(progress.ease_factor, rating);
    progress.current_interval = new_interval;
    progress.last_reviewed = now;
    progress.next_review = now + TimeDelta::days(i64::from(new_interval));
    progress.review_count += 1;

    match rating {
        Rating::Again | Rating::Hard => progress.difficulty = DifficultyTag::Hard,
        Rating::Easy => progress.difficulty = DifficultyTag::Easy,
        Rating::Good => {}
    }

    progress.recompute_derived();
}
