//! Review scheduler route tests.

mod common;

use axum::http::StatusCode;
use common::{get_json, post_json, test_app};
use serde_json::json;
use std::time::Duration;

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

#[tokio::test]
async fn test_answer_creates_item_from_dataset() {
    let app = test_app();
    let (status, body) = post_json(
        &app.router,
        "/api/review/abandon/answer",
        json!({ "correct": true }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "abandon");
    // Level and topic come from the vocabulary dataset.
    assert_eq!(body["level"], "B2");
    assert_eq!(body["topic"], "actions");
    assert_eq!(body["correctCount"], 1);
    assert_eq!(body["status"], "learning");
}

#[tokio::test]
async fn test_answer_unknown_word_uses_body_level() {
    let app = test_app();
    let (status, body) = post_json(
        &app.router,
        "/api/review/serendipity/answer",
        json!({ "correct": false, "level": "C2", "topic": "luck" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["level"], "C2");
    assert_eq!(body["topic"], "luck");
    assert_eq!(body["incorrectCount"], 1);
}

#[tokio::test]
async fn test_rate_without_state_is_noop() {
    let app = test_app();
    let (status, body) = post_json(
        &app.router,
        "/api/review/never-seen/rate",
        json!({ "rating": "good" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], false);
}

#[tokio::test]
async fn test_rate_advances_the_schedule() {
    let app = test_app();
    post_json(
        &app.router,
        "/api/review/abandon/answer",
        json!({ "correct": true }),
    )
    .await;

    let (status, body) = post_json(
        &app.router,
        "/api/review/abandon/rate",
        json!({ "rating": "good" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], true);
    assert_eq!(body["progress"]["reviewCount"], 1);
    assert_eq!(body["progress"]["currentInterval"], 1);
}

#[tokio::test]
async fn test_again_rating_marks_item_hard() {
    let app = test_app();
    post_json(
        &app.router,
        "/api/review/abandon/answer",
        json!({ "correct": false }),
    )
    .await;
    let (_, body) = post_json(
        &app.router,
        "/api/review/abandon/rate",
        json!({ "rating": "again" }),
    )
    .await;

    assert_eq!(body["progress"]["difficulty"], "hard");
}

#[tokio::test]
async fn test_due_lists_overdue_items_most_overdue_first() {
    let app = test_app();
    post_json(
        &app.router,
        "/api/review/abandon/answer",
        json!({ "correct": true }),
    )
    .await;
    app.clock.advance(3 * DAY);
    post_json(
        &app.router,
        "/api/review/ability/answer",
        json!({ "correct": true }),
    )
    .await;
    app.clock.advance(2 * DAY);

    let (status, body) = get_json(&app.router, "/api/review/due").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["items"][0]["itemId"], "abandon");
    assert_eq!(body["items"][0]["daysOverdue"], 4);
}

#[tokio::test]
async fn test_due_is_empty_before_anything_comes_due() {
    let app = test_app();
    post_json(
        &app.router,
        "/api/review/abandon/answer",
        json!({ "correct": true }),
    )
    .await;

    let (_, body) = get_json(&app.router, "/api/review/due").await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_batch_with_seed_is_deterministic() {
    let app = test_app();
    let (status, first) =
        get_json(&app.router, "/api/review/batch?count=4&strategy=balanced&seed=7").await;
    let (_, second) =
        get_json(&app.router, "/api/review/batch?count=4&strategy=balanced&seed=7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["words"], second["words"]);
    assert_eq!(first["count"], 4);
    assert_eq!(first["strategy"], "balanced");
}

#[tokio::test]
async fn test_batch_easy_strategy_prefers_low_levels() {
    let app = test_app();
    let (_, body) = get_json(&app.router, "/api/review/batch?count=1&strategy=easy").await;

    // The only A1 word in the sample set scores lowest.
    assert_eq!(body["words"][0]["Level"], "A1");
}

#[tokio::test]
async fn test_batch_level_filter() {
    let app = test_app();
    let (_, body) = get_json(&app.router, "/api/review/batch?count=10&level=A2").await;

    for word in body["words"].as_array().unwrap() {
        assert_eq!(word["Level"], "A2");
    }
}

#[tokio::test]
async fn test_forecast_counts_upcoming_reviews() {
    let app = test_app();
    post_json(
        &app.router,
        "/api/review/abandon/answer",
        json!({ "correct": true }),
    )
    .await;

    let (status, body) = get_json(&app.router, "/api/review/forecast?days=3").await;
    assert_eq!(status, StatusCode::OK);
    let days = body["forecast"].as_array().unwrap();
    assert_eq!(days.len(), 3);
    // New items come due tomorrow.
    assert_eq!(days[1]["count"], 1);
}

#[tokio::test]
async fn test_stats_reflect_study_activity() {
    let app = test_app();
    post_json(
        &app.router,
        "/api/review/abandon/answer",
        json!({ "correct": true }),
    )
    .await;

    let (status, body) = get_json(&app.router, "/api/review/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["studyStats"]["learnedWords"], 1);
    assert_eq!(body["studyStats"]["streak"], 1);
    assert_eq!(body["dueCount"], 0);
    let target = body["targetDifficulty"].as_f64().unwrap();
    assert!((3.0..=8.0).contains(&target));
}

#[tokio::test]
async fn test_weak_areas_report_items_below_threshold() {
    let app = test_app();
    for _ in 0..3 {
        post_json(
            &app.router,
            "/api/review/abandon/answer",
            json!({ "correct": false }),
        )
        .await;
    }

    let (status, body) = get_json(&app.router, "/api/review/weak-areas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["word"], "abandon");
    assert_eq!(body["byLevel"][0]["key"], "B2");
}

#[tokio::test]
async fn test_reset_clears_all_progress() {
    let app = test_app();
    post_json(
        &app.router,
        "/api/review/abandon/answer",
        json!({ "correct": true }),
    )
    .await;

    let (status, body) = post_json(&app.router, "/api/review/reset", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reset"], true);

    let (_, stats) = get_json(&app.router, "/api/review/stats").await;
    assert_eq!(stats["studyStats"]["learnedWords"], 0);
}
