//! Review scheduler routes.
//!
//! Item ids are base words for vocabulary items; any string id works,
//! which lets the client track grammar guidewords through the same
//! scheduler.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use lexi_core::difficulty::{ScoredItem, select_batch};
use lexi_core::srs::{self, daily_goal, forecast};
use lexi_core::{
    DifficultyScorer, ItemProgress, Level, Rating, RecentPerformance, ReviewQueue,
    SelectionStrategy, target_difficulty,
};

use crate::dataset::WordEntry;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/due", get(due))
        .route("/batch", get(batch))
        .route("/forecast", get(forecast_route))
        .route("/stats", get(stats))
        .route("/weak-areas", get(weak_areas))
        .route("/reset", post(reset))
        .route("/:id/answer", post(answer))
        .route("/:id/rate", post(rate))
}

async fn due(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let now = state.clock.now();
    let items = state.progress.all().await?;
    let queue = ReviewQueue::build(&items, now);
    Ok(Json(json!({ "total": queue.len(), "items": queue.items })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswerBody {
    correct: bool,
    level: Option<String>,
    topic: Option<String>,
}

/// Record one practice answer, creating the item's state on first
/// contact. Level and topic fall back to the vocabulary dataset when
/// the body omits them.
async fn answer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<AnswerBody>,
) -> ApiResult<Json<ItemProgress>> {
    let now = state.clock.now();
    let mut progress = match state.progress.get(&id).await? {
        Some(existing) => existing,
        None => {
            let dataset_word = state.dataset.word_by_base(&id);
            let level = body
                .level
                .as_deref()
                .map(|label| label.parse().unwrap_or(Level::Unknown))
                .or_else(|| dataset_word.map(|w| w.level()))
                .unwrap_or(Level::Unknown);
            let mut fresh = ItemProgress::new(&id, level, now);
            let topic = body.topic.clone().or_else(|| {
                dataset_word
                    .filter(|w| !w.topic.is_empty())
                    .map(|w| w.topic.clone())
            });
            if let Some(topic) = topic {
                fresh = fresh.with_topic(topic);
            }
            fresh
        }
    };

    progress.record_attempt(body.correct);
    state.progress.set(&id, progress.clone()).await?;
    state.progress.record_study_day(now.date_naive()).await?;
    Ok(Json(progress))
}

#[derive(Debug, Deserialize)]
struct RateBody {
    rating: String,
}

/// Complete a review cycle with a self-assessed rating. Rating an item
/// with no stored state is a no-op.
async fn rate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<RateBody>,
) -> ApiResult<Json<Value>> {
    let now = state.clock.now();
    let rating: Rating = body.rating.parse().unwrap_or(Rating::Good);

    match state.progress.get(&id).await? {
        Some(mut progress) => {
            srs::rate(&mut progress, rating, now);
            state.progress.set(&id, progress.clone()).await?;
            state.progress.record_study_day(now.date_naive()).await?;
            Ok(Json(json!({ "updated": true, "progress": progress })))
        }
        None => Ok(Json(json!({ "updated": false }))),
    }
}

#[derive(Debug, Deserialize)]
struct BatchQuery {
    count: Option<usize>,
    strategy: Option<SelectionStrategy>,
    level: Option<String>,
    /// Seed for reproducible batches; omitted in normal use
    seed: Option<u64>,
}

async fn batch(
    State(state): State<AppState>,
    Query(query): Query<BatchQuery>,
) -> ApiResult<Json<Value>> {
    let now = state.clock.now();
    let tracked = state.progress.all().await?;
    let performance = RecentPerformance::compute(&tracked, now);
    let target = target_difficulty(&performance);
    let scorer = DifficultyScorer;

    let pool: Vec<ScoredItem<WordEntry>> = state
        .dataset
        .words()
        .iter()
        .filter(|w| match &query.level {
            Some(level) => w.level.eq_ignore_ascii_case(level),
            None => true,
        })
        .map(|w| {
            let progress = tracked.get(&w.base_word);
            ScoredItem::new(w.clone(), scorer.score(w.level(), progress, now))
        })
        .collect();

    let count = query.count.unwrap_or(10).min(50);
    let strategy = query.strategy.unwrap_or_default();
    let words = match query.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            select_batch(pool, count, strategy, target, &mut rng)
        }
        None => {
            let mut rng = rand::rng();
            select_batch(pool, count, strategy, target, &mut rng)
        }
    };

    Ok(Json(json!({
        "strategy": strategy,
        "targetDifficulty": target,
        "count": words.len(),
        "words": words,
    })))
}

#[derive(Debug, Deserialize)]
struct ForecastQuery {
    days: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ForecastDay {
    date: NaiveDate,
    count: usize,
}

async fn forecast_route(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> ApiResult<Json<Value>> {
    let now = state.clock.now();
    let items = state.progress.all().await?;
    let days = query.days.unwrap_or(7).min(60);
    let prediction: Vec<ForecastDay> = forecast(&items, now, days)
        .into_iter()
        .map(|(date, count)| ForecastDay { date, count })
        .collect();
    Ok(Json(json!({ "days": days, "forecast": prediction })))
}

async fn stats(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let now = state.clock.now();
    let items = state.progress.all().await?;
    let study = state.progress.study_stats().await?;
    let performance = RecentPerformance::compute(&items, now);
    let target = target_difficulty(&performance);
    let due = ReviewQueue::build(&items, now).len();

    Ok(Json(json!({
        "studyStats": study,
        "recentPerformance": performance,
        "targetDifficulty": target,
        "dueCount": due,
        "dailyGoal": daily_goal(due, 7),
    })))
}

async fn weak_areas(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let items = state.progress.all().await?;
    let report = lexi_core::difficulty::analyze_weak_areas(&items);
    Ok(Json(json!(report)))
}

async fn reset(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    state.progress.reset().await?;
    log::info!("progress store reset");
    Ok(Json(json!({ "reset": true })))
}
