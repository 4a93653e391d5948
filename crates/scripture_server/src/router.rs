//! Router construction for the scripture server.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use scripture_core::ScriptureService;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;

/// Build the full axum router with all routes and middleware.
pub fn build_router(service: Arc<dyn ScriptureService>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/versions", get(handlers::versions::list_versions))
        .route("/books", get(handlers::books::list_books))
        .route("/books/:book_id", get(handlers::books::get_book))
        .route(
            "/books/:book_id/chapters",
            get(handlers::books::list_chapters),
        )
        .route(
            "/books/:book_id/chapters/:chapter_id/verses",
            get(handlers::verses::list_verses),
        )
        .route(
            "/books/:book_id/chapters/:chapter_id/verses/:verse_id",
            get(handlers::verses::get_verse),
        )
        .route("/search", get(handlers::search::search))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .layer(Extension(service))
}
