//! GET /search?query=... - regex search over the default module.

use std::sync::Arc;

use axum::{extract::Query, Extension, Json};
use scripture_core::{types::SearchResult, ScriptureService};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

pub async fn search(
    Extension(service): Extension<Arc<dyn ScriptureService>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let query = params.query.unwrap_or_default();
    let results = service.search(&query)?;
    Ok(Json(SearchResponse { results }))
}
