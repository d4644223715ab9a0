use crate::models::book::BookRecord;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

/// One page of the letter listing, handed to the listing template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub rows: Vec<BookRecord>,
    pub letter: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub offset: u64,
}

/// Book with its multi-value columns split, handed to the detail template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookDetail {
    pub book_id: i64,
    pub title: String,
    pub authors: Vec<String>,
    pub genres: Vec<String>,
    pub description: String,
    pub pages: i64,
    pub rating: String,
    pub rating_count: i64,
}

/// JSON body of `GET /book/detail/:book_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub book_id: i64,
    pub title: String,
    pub authors: Vec<String>,
    pub summary: String,
    pub pages: i64,
    pub rating: f64,
    pub rating_count: i64,
    pub genre: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Review {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub publication_dt: String,
    #[serde(default)]
    pub byline: String,
    #[serde(default)]
    pub book_title: String,
    #[serde(default)]
    pub book_author: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub isbn13: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewPage {
    pub title: String,
    pub has_results: bool,
    pub reviews: Vec<Review>,
}
