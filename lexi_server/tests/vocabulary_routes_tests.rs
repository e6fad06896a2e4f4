//! Vocabulary and grammar route tests over the sample datasets.

mod common;

use axum::http::StatusCode;
use common::{get_json, test_app};

#[tokio::test]
async fn test_list_words_returns_all_with_pagination() {
    let app = test_app();
    let (status, body) = get_json(&app.router, "/api/vocabulary/words").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 6);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["data"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_list_words_filters_by_level() {
    let app = test_app();
    let (status, body) = get_json(&app.router, "/api/vocabulary/words?level=A2").await;

    assert_eq!(status, StatusCode::OK);
    for word in body["data"].as_array().unwrap() {
        assert_eq!(word["Level"], "A2");
    }
    assert!(body["pagination"]["total"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_list_words_search_matches_base_word() {
    let app = test_app();
    let (status, body) = get_json(&app.router, "/api/vocabulary/words?search=abandon").await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["Base Word"], "abandon");
}

#[tokio::test]
async fn test_list_words_pagination_slices() {
    let app = test_app();
    let (_, page1) = get_json(&app.router, "/api/vocabulary/words?limit=4&page=1").await;
    let (_, page2) = get_json(&app.router, "/api/vocabulary/words?limit=4&page=2").await;

    assert_eq!(page1["data"].as_array().unwrap().len(), 4);
    assert_eq!(page2["data"].as_array().unwrap().len(), 2);
    assert_eq!(page1["pagination"]["totalPages"], 2);
}

#[tokio::test]
async fn test_word_by_id_is_positional() {
    let app = test_app();
    let (status, body) = get_json(&app.router, "/api/vocabulary/words/0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Base Word"], "abandon");
}

#[tokio::test]
async fn test_word_by_unknown_id_is_404() {
    let app = test_app();
    let (status, body) = get_json(&app.router, "/api/vocabulary/words/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_random_words_respects_count() {
    let app = test_app();
    let (status, body) = get_json(&app.router, "/api/vocabulary/random?count=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn test_topics_skip_blank_and_sort_by_count() {
    let app = test_app();
    let (status, body) = get_json(&app.router, "/api/vocabulary/topics").await;

    assert_eq!(status, StatusCode::OK);
    let topics = body["data"].as_array().unwrap();
    assert!(!topics.is_empty());
    for topic in topics {
        assert_ne!(topic["topic"], "");
    }
    let counts: Vec<u64> = topics
        .iter()
        .map(|t| t["count"].as_u64().unwrap())
        .collect();
    let mut sorted = counts.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(counts, sorted);
}

#[tokio::test]
async fn test_vocabulary_stats_sum_to_total() {
    let app = test_app();
    let (status, body) = get_json(&app.router, "/api/vocabulary/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalWords"], 6);
    let by_level: u64 = body["byLevel"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(by_level, 6);
}

#[tokio::test]
async fn test_grammar_points_filter_by_level() {
    let app = test_app();
    let (status, body) = get_json(&app.router, "/api/grammar/points?level=A1").await;

    assert_eq!(status, StatusCode::OK);
    for point in body["data"].as_array().unwrap() {
        assert_eq!(point["Level"], "A1");
    }
}

#[tokio::test]
async fn test_grammar_stats_totals() {
    let app = test_app();
    let (status, body) = get_json(&app.router, "/api/grammar/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalPoints"], 3);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app();
    let (status, body) = get_json(&app.router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
