//! End-to-end scheduler flows over the progress store.

use chrono::{TimeZone, Utc};
use std::collections::HashMap;

use lexi_core::difficulty::analyze_weak_areas;
use lexi_core::srs::{self, Rating};
use lexi_core::{
    DifficultyScorer, ItemStatus, Level, MemoryProgressStore, ProgressStore, RecentPerformance,
    ReviewQueue, target_difficulty,
};
use lexi_test_utils::ProgressBuilder;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

#[tokio::test]
async fn test_review_cycle_through_the_store() {
    let store = MemoryProgressStore::new();
    let mut item = ProgressBuilder::new("abandon")
        .level(Level::B2)
        .counts(3, 1)
        .build();

    srs::rate(&mut item, Rating::Good, now());
    store.set("abandon", item).await.unwrap();

    let loaded = store.get("abandon").await.unwrap().unwrap();
    assert_eq!(loaded.review_count, 1);
    assert_eq!(loaded.status, ItemStatus::Learning);

    let stats = store.study_stats().await.unwrap();
    assert_eq!(stats.learned_words, 1);
    assert_eq!(stats.mastered_words, 0);
}

#[tokio::test]
async fn test_mastered_item_leaves_the_queue() {
    let store = MemoryProgressStore::new();
    let mastered = ProgressBuilder::new("ability")
        .counts(9, 1)
        .reviews(4)
        .overdue(3)
        .build();
    assert_eq!(mastered.status, ItemStatus::Mastered);
    store.set("ability", mastered).await.unwrap();

    let struggling = ProgressBuilder::new("abroad").counts(1, 2).overdue(1).build();
    store.set("abroad", struggling).await.unwrap();

    let items = store.all().await.unwrap();
    let queue = ReviewQueue::build(&items, now());
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.items[0].item_id, "abroad");

    let stats = store.study_stats().await.unwrap();
    assert_eq!(stats.mastered_words, 1);
}

#[test]
fn test_struggling_learner_gets_easier_material() {
    let mut items = HashMap::new();
    for (i, word) in ["a", "b", "c"].iter().enumerate() {
        items.insert(
            word.to_string(),
            ProgressBuilder::new(word)
                .level(Level::B1)
                .counts(1, 4 + i as u32)
                .reviewed_days_ago(1)
                .build(),
        );
    }

    let performance = RecentPerformance::compute(&items, now());
    assert!(performance.accuracy < 0.6);
    let target = target_difficulty(&performance);
    // B1 average weight is 3, stepped down and clamped to the floor.
    assert_eq!(target, 3.0);

    let report = analyze_weak_areas(&items);
    assert_eq!(report.items.len(), 3);
    assert_eq!(report.by_level[0].key, "B1");
}

#[test]
fn test_scorer_tracks_history_from_built_state() {
    let scorer = DifficultyScorer;
    let strong = ProgressBuilder::new("able")
        .level(Level::A2)
        .counts(9, 1)
        .reviews(6)
        .reviewed_days_ago(2)
        .build();
    let unseen_score = scorer.score(Level::A2, None, now());
    let strong_score = scorer.score(Level::A2, Some(&strong), now());
    // accuracy bonus and heavy-review bonus both apply
    assert!((strong_score - unseen_score - 0.8).abs() < 1e-9);
}
