use crate::utils::html;
use axum::{http::StatusCode, response::Html};

pub async fn landing() -> Html<String> {
    Html(html::landing())
}

pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(html::not_found()))
}
