//! Vocabulary dataset routes.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::dataset::{Page, VocabularyQuery, WordEntry};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/words", get(list_words))
        .route("/words/:id", get(word_by_id))
        .route("/random", get(random_words))
        .route("/topics", get(topics))
        .route("/stats", get(stats))
}

async fn list_words(
    State(state): State<AppState>,
    Query(query): Query<VocabularyQuery>,
) -> Json<Page<WordEntry>> {
    let matches: Vec<WordEntry> = state
        .dataset
        .filter_words(&query)
        .into_iter()
        .cloned()
        .collect();
    Json(Page::build(matches, query.page, query.limit))
}

async fn word_by_id(
    State(state): State<AppState>,
    Path(id): Path<usize>,
) -> ApiResult<Json<WordEntry>> {
    state
        .dataset
        .word(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("word {id} not found")))
}

#[derive(Debug, Deserialize)]
struct RandomQuery {
    level: Option<String>,
    count: Option<usize>,
}

async fn random_words(
    State(state): State<AppState>,
    Query(query): Query<RandomQuery>,
) -> Json<Value> {
    let count = query.count.unwrap_or(10).min(100);
    let mut rng = rand::rng();
    let words: Vec<WordEntry> = state
        .dataset
        .random_words(query.level.as_deref(), count, &mut rng)
        .into_iter()
        .cloned()
        .collect();
    Json(json!({ "count": words.len(), "data": words }))
}

#[derive(Debug, Deserialize)]
struct TopicsQuery {
    level: Option<String>,
}

async fn topics(State(state): State<AppState>, Query(query): Query<TopicsQuery>) -> Json<Value> {
    let topics = state.dataset.topics(query.level.as_deref());
    Json(json!({ "totalTopics": topics.len(), "data": topics }))
}

async fn stats(State(state): State<AppState>) -> Json<Value> {
    Json(json!(state.dataset.vocabulary_stats()))
}
