//! GET /books/:book_id/chapters/:chapter_id/verses           - whole chapter
//! GET /books/:book_id/chapters/:chapter_id/verses/:verse_id - single verse

use std::sync::Arc;

use axum::{extract::Path, Extension, Json};
use scripture_core::{types::Verse, ScriptureService};
use serde::Serialize;

use super::parse_segment;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct VersesResponse {
    pub verses: Vec<Verse>,
}

#[derive(Debug, Serialize)]
pub struct VerseResponse {
    pub verse: Verse,
}

pub async fn list_verses(
    Extension(service): Extension<Arc<dyn ScriptureService>>,
    Path((book_id, chapter_id)): Path<(String, String)>,
) -> Result<Json<VersesResponse>, AppError> {
    let verses = service.verses(&book_id, parse_segment(&chapter_id))?;
    Ok(Json(VersesResponse { verses }))
}

pub async fn get_verse(
    Extension(service): Extension<Arc<dyn ScriptureService>>,
    Path((book_id, chapter_id, verse_id)): Path<(String, String, String)>,
) -> Result<Json<VerseResponse>, AppError> {
    let verse = service.verse(
        &book_id,
        parse_segment(&chapter_id),
        parse_segment(&verse_id),
    )?;
    Ok(Json(VerseResponse { verse }))
}
