//! Practice batch selection strategies
//!
//! Four ways of drawing N items from a scored candidate pool. The
//! balanced strategy shuffles with a caller-supplied rng so selection
//! stays deterministic under a seeded generator.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A candidate carrying its computed difficulty score
#[derive(Debug, Clone)]
pub struct ScoredItem<T> {
    pub item: T,
    pub score: f64,
}

impl<T> ScoredItem<T> {
    pub fn new(item: T, score: f64) -> Self {
        Self { item, score }
    }
}

/// Batch selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionStrategy {
    /// Lowest N by difficulty score
    Easy,
    /// Highest N by difficulty score
    Hard,
    /// Closest N to the target difficulty
    Adaptive,
    /// 30% easy tercile, 50% middle, 20% top, shuffled.
    /// Catch-all: unrecognized labels deserialize to this variant.
    #[serde(other)]
    Balanced,
}

impl Default for SelectionStrategy {
    fn default() -> Self {
        SelectionStrategy::Balanced
    }
}

/// Draw a practice batch of up to `count` items from the pool.
///
/// `target` only matters to the adaptive strategy; adaptive ties break
/// by original pool order (stable sort).
pub fn select_batch<T, R: Rng + ?Sized>(
    pool: Vec<ScoredItem<T>>,
    count: usize,
    strategy: SelectionStrategy,
    target: f64,
    rng: &mut R,
) -> Vec<T> {
    match strategy {
        SelectionStrategy::Easy => {
            let mut sorted = pool;
            sorted.sort_by(|a, b| a.score.total_cmp(&b.score));
            sorted.truncate(count);
            sorted.into_iter().map(|s| s.item).collect()
        }
        SelectionStrategy::Hard => {
            let mut sorted = pool;
            sorted.sort_by(|a, b| a.score.total_cmp(&b.score));
            let skip = sorted.len().saturating_sub(count);
            sorted.into_iter().skip(skip).map(|s| s.item).collect()
        }
        SelectionStrategy::Balanced => {
            let mut sorted = pool;
            sorted.sort_by(|a, b| a.score.total_cmp(&b.score));

            let total = sorted.len();
            let easy_end = total * 3 / 10;
            let medium_end = total * 8 / 10;

            let easy_count = count * 3 / 10;
            let medium_count = count / 2;
            let hard_count = count.saturating_sub(easy_count + medium_count);

            let mut selected: Vec<ScoredItem<T>> = Vec::with_capacity(count);
            let mut rest = sorted;
            let upper = rest.split_off(medium_end.min(rest.len()));
            let middle = rest.split_off(easy_end.min(rest.len()));
            let lower = rest;

            selected.extend(lower.into_iter().take(easy_count));
            selected.extend(middle.into_iter().take(medium_count));
            selected.extend(upper.into_iter().take(hard_count));

            selected.shuffle(rng);
            selected.into_iter().map(|s| s.item).collect()
        }
        SelectionStrategy::Adaptive => {
            let mut by_distance = pool;
            by_distance.sort_by(|a, b| {
                (a.score - target).abs().total_cmp(&(b.score - target).abs())
            });
            by_distance.truncate(count);
            by_distance.into_iter().map(|s| s.item).collect()
        }
    }
}
