pub mod books;
pub mod health;
pub mod landing;
pub mod review;

use crate::models::storage::BookStore;
use crate::services::review::ReviewClient;
use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub type Backend = Arc<dyn BookStore + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub store: Backend,
    pub reviews: ReviewClient,
}

pub fn router(state: AppState, static_dir: &str) -> Router {
    // Any method other than GET/HEAD gets the 404 page, on known paths as well as unknown ones.
    let static_files = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(landing::not_found.into_service());

    Router::new()
        .route("/", get(landing::landing).fallback(landing::not_found))
        .route("/status", get(health::health_check).fallback(landing::not_found))
        .route("/book/:letter", get(books::list_books).fallback(landing::not_found))
        .route(
            "/book/detail/:book_id",
            get(books::book_detail).fallback(landing::not_found),
        )
        .route(
            "/book/detail/:book_id/review",
            get(review::book_review).fallback(landing::not_found),
        )
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
