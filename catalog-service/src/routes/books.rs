use crate::models::error::CatalogError;
use crate::routes::AppState;
use crate::services::detail::{format_detail, DetailOutput};
use crate::services::pagination::{paginate, Navigation};
use crate::utils::html;
use crate::utils::negotiate::Representation;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub struct ListingParams {
    pub offset: Option<String>,
    #[serde(rename = "btnState")]
    pub btn_state: Option<String>,
}

/// Path ids that are not integers cannot match a row.
pub fn parse_book_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

pub async fn list_books(
    Path(letter): Path<String>,
    Query(params): Query<ListingParams>,
    State(state): State<AppState>,
) -> Result<Html<String>, CatalogError> {
    let navigation = Navigation::from_param(params.btn_state.as_deref());
    let page = paginate(
        state.store.as_ref(),
        &letter,
        params.offset.as_deref(),
        navigation,
    )
    .await?;

    Ok(Html(html::listing(&page)))
}

pub async fn book_detail(
    Path(book_id): Path<String>,
    headers: HeaderMap,
    State(state): State<AppState>,
) -> Result<Response, CatalogError> {
    info!("Detail for book {}", book_id);

    let record = match parse_book_id(&book_id) {
        Some(id) => state.store.book_by_id(id).await?,
        None => None,
    };

    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok());
    let Some(representation) = Representation::negotiate(accept) else {
        if record.is_none() {
            return Err(CatalogError::NotFound(book_id));
        }
        warn!("No acceptable representation for Accept: {:?}", accept);
        return Ok((StatusCode::NOT_ACCEPTABLE, "Not Acceptable").into_response());
    };

    match format_detail(&book_id, record, representation)? {
        DetailOutput::Markup(detail) => Ok(Html(html::detail(&detail)).into_response()),
        DetailOutput::Structured(payload) => Ok(Json(payload).into_response()),
    }
}
