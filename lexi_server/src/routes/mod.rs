//! Route tree and shared middleware.

pub mod dictionary;
pub mod grammar;
pub mod review;
pub mod vocabulary;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/vocabulary", vocabulary::router())
        .nest("/api/grammar", grammar::router())
        .nest("/api/dictionary", dictionary::router())
        .nest("/api/review", review::router())
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
