use crate::models::error::CatalogError;
use crate::routes::books::parse_book_id;
use crate::routes::AppState;
use crate::utils::html;
use axum::{
    extract::{Path, State},
    response::Html,
};

pub async fn book_review(
    Path(book_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Html<String>, CatalogError> {
    let title = match parse_book_id(&book_id) {
        Some(id) => state.store.title_by_id(id).await?,
        None => None,
    }
    .ok_or_else(|| CatalogError::NotFound(book_id.clone()))?;

    let page = state.reviews.reviews_for(&title).await?;
    Ok(Html(html::reviews(&page)))
}
