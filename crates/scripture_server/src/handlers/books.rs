//! Book and chapter listing.
//!
//! GET /books                    - every book, Old Testament first
//! GET /books/:book_id           - one book by abbreviation or full name
//! GET /books/:book_id/chapters  - chapter numbers of a book

use std::sync::Arc;

use axum::{extract::Path, Extension, Json};
use scripture_core::{
    types::{Book, Chapter},
    ScriptureService,
};
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub book: Book,
}

#[derive(Debug, Serialize)]
pub struct ChaptersResponse {
    pub chapters: Vec<Chapter>,
}

pub async fn list_books(
    Extension(service): Extension<Arc<dyn ScriptureService>>,
) -> Result<Json<BooksResponse>, AppError> {
    let books = service.books()?;
    Ok(Json(BooksResponse { books }))
}

pub async fn get_book(
    Extension(service): Extension<Arc<dyn ScriptureService>>,
    Path(book_id): Path<String>,
) -> Result<Json<BookResponse>, AppError> {
    let book = service.book(&book_id)?;
    Ok(Json(BookResponse { book }))
}

pub async fn list_chapters(
    Extension(service): Extension<Arc<dyn ScriptureService>>,
    Path(book_id): Path<String>,
) -> Result<Json<ChaptersResponse>, AppError> {
    let chapters = service.chapters(&book_id)?;
    Ok(Json(ChaptersResponse { chapters }))
}
