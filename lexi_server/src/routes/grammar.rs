//! Grammar dataset routes.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::dataset::{GrammarPoint, GrammarQuery, Page};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/points", get(list_points))
        .route("/points/:id", get(point_by_id))
        .route("/stats", get(stats))
}

async fn list_points(
    State(state): State<AppState>,
    Query(query): Query<GrammarQuery>,
) -> Json<Page<GrammarPoint>> {
    let matches: Vec<GrammarPoint> = state
        .dataset
        .filter_grammar(&query)
        .into_iter()
        .cloned()
        .collect();
    Json(Page::build(matches, query.page, query.limit))
}

async fn point_by_id(
    State(state): State<AppState>,
    Path(id): Path<usize>,
) -> ApiResult<Json<GrammarPoint>> {
    state
        .dataset
        .grammar()
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("grammar point {id} not found")))
}

async fn stats(State(state): State<AppState>) -> Json<Value> {
    Json(json!(state.dataset.grammar_stats()))
}
