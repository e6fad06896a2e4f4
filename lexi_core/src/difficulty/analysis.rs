//! Weak-area analysis
//!
//! Surfaces items the learner keeps missing: anything with at least
//! three attempts and accuracy under 60%, grouped by level and topic.

use crate::level::Level;
use crate::progress::ItemProgress;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// Minimum attempts before an item has enough data to judge
const MIN_ATTEMPTS: u32 = 3;
/// Accuracy below this marks an item weak
const WEAK_ACCURACY: f64 = 0.6;

/// One struggling item
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakItem {
    pub item_id: String,
    pub word: String,
    pub level: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub accuracy: f64,
    pub attempts: u32,
    pub correct_count: u32,
    pub incorrect_count: u32,
}

/// Weak items aggregated under one grouping key
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakGroup {
    pub key: String,
    pub count: usize,
    pub average_accuracy: f64,
}

/// Full weak-area report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakAreaReport {
    /// Weak items, lowest accuracy first
    pub items: Vec<WeakItem>,
    pub by_level: Vec<WeakGroup>,
    pub by_topic: Vec<WeakGroup>,
}

/// Analyze the item map for weak areas
pub fn analyze_weak_areas(items: &HashMap<String, ItemProgress>) -> WeakAreaReport {
    let mut weak: Vec<WeakItem> = items
        .iter()
        .filter_map(|(item_id, progress)| {
            if progress.attempts() < MIN_ATTEMPTS {
                return None;
            }
            let accuracy = progress.accuracy().unwrap_or(0.0);
            if accuracy >= WEAK_ACCURACY {
                return None;
            }
            Some(WeakItem {
                item_id: item_id.clone(),
                word: progress.word.clone(),
                level: progress.level,
                topic: progress.topic.clone(),
                accuracy,
                attempts: progress.attempts(),
                correct_count: progress.correct_count,
                incorrect_count: progress.incorrect_count,
            })
        })
        .collect();

    weak.sort_by(|a, b| a.accuracy.total_cmp(&b.accuracy));

    let by_level = group_by(&weak, |item| item.level.as_str().to_string());
    let by_topic = group_by(&weak, |item| {
        item.topic.clone().unwrap_or_else(|| "Unknown".to_string())
    });

    WeakAreaReport {
        items: weak,
        by_level,
        by_topic,
    }
}

fn group_by(items: &[WeakItem], key_of: impl Fn(&WeakItem) -> String) -> Vec<WeakGroup> {
    let mut buckets: BTreeMap<String, (usize, f64)> = BTreeMap::new();
    for item in items {
        let entry = buckets.entry(key_of(item)).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += item.accuracy;
    }

    let mut groups: Vec<WeakGroup> = buckets
        .into_iter()
        .map(|(key, (count, accuracy_sum))| WeakGroup {
            key,
            count,
            average_accuracy: accuracy_sum / count as f64,
        })
        .collect();

    // biggest problem areas first
    groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    groups
}
