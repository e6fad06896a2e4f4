//! Dictionary lookup route.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::dictionary::{DictionaryEntry, Language};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/:language/*entry", get(lookup))
}

async fn lookup(
    State(state): State<AppState>,
    Path((language, entry)): Path<(String, String)>,
) -> ApiResult<Json<DictionaryEntry>> {
    let language = Language::from_slug(&language)
        .ok_or_else(|| ApiError::bad_request(format!("unsupported dictionary language: {language}")))?;
    let entry = state.dictionary.lookup(language, entry.trim_matches('/')).await?;
    Ok(Json(entry))
}
