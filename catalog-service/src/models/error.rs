use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("no book with id {0}")]
    NotFound(String),
    #[error("malformed data: {0}")]
    MalformedData(String),
    #[error("{0}")]
    UpstreamFault(String),
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => CatalogError::StoreUnavailable(err.to_string()),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                CatalogError::MalformedData(err.to_string())
            }
            other => CatalogError::QueryFailed(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::UpstreamFault(err.to_string())
    }
}

// Every failure is reported the same way: 400 with the message echoed back.
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("error {}", self),
        )
            .into_response()
    }
}
