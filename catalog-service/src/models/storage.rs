use crate::models::book::BookRecord;
use crate::models::error::CatalogError;
use crate::utils::config::StoreConfig;
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Row;
use std::future::Future;
use std::time::Duration;

// Prefix matching compares bytes, so it ignores the column's case-insensitive collation.
const SQL_BOOKS_BY_PREFIX: &str = r#"
    SELECT CAST(book_id AS SIGNED) AS book_id, title, authors, genres, description,
           CAST(pages AS SIGNED) AS pages, CAST(rating AS CHAR) AS rating,
           CAST(rating_count AS SIGNED) AS rating_count
    FROM book2018
    WHERE title LIKE CAST(? AS BINARY)
    ORDER BY title, book_id
    LIMIT ? OFFSET ?
"#;
const SQL_COUNT_BY_PREFIX: &str =
    "SELECT COUNT(*) AS count FROM book2018 WHERE title LIKE CAST(? AS BINARY)";
const SQL_BOOK_BY_ID: &str = r#"
    SELECT CAST(book_id AS SIGNED) AS book_id, title, authors, genres, description,
           CAST(pages AS SIGNED) AS pages, CAST(rating AS CHAR) AS rating,
           CAST(rating_count AS SIGNED) AS rating_count
    FROM book2018
    WHERE book_id = ?
"#;
const SQL_TITLE_BY_ID: &str = "SELECT title FROM book2018 WHERE book_id = ?";

/// Read-only access to the book table, one method per access pattern.
#[async_trait]
pub trait BookStore {
    /// Books whose title starts with `prefix`, at most `limit` of them after skipping `offset`.
    async fn books_by_prefix(
        &self,
        prefix: &str,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<BookRecord>, CatalogError>;
    /// Number of books whose title starts with `prefix`.
    async fn count_by_prefix(&self, prefix: &str) -> Result<u64, CatalogError>;
    async fn book_by_id(&self, book_id: i64) -> Result<Option<BookRecord>, CatalogError>;
    async fn title_by_id(&self, book_id: i64) -> Result<Option<String>, CatalogError>;
    async fn test_connection(&self) -> Result<(), CatalogError>;
}

/// Builds a LIKE pattern matching titles that start with `prefix` literally.
pub fn like_prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn book_from_row(row: &MySqlRow) -> Result<BookRecord, sqlx::Error> {
    Ok(BookRecord {
        book_id: row.try_get("book_id")?,
        title: row.try_get::<Option<String>, _>("title")?.unwrap_or_default(),
        authors: row.try_get::<Option<String>, _>("authors")?.unwrap_or_default(),
        genres: row.try_get::<Option<String>, _>("genres")?.unwrap_or_default(),
        description: row
            .try_get::<Option<String>, _>("description")?
            .unwrap_or_default(),
        pages: row.try_get::<Option<i64>, _>("pages")?.unwrap_or(0),
        rating: row.try_get::<Option<String>, _>("rating")?.unwrap_or_default(),
        rating_count: row.try_get::<Option<i64>, _>("rating_count")?.unwrap_or(0),
    })
}

pub struct MySqlBackend {
    pool: MySqlPool,
    timeout: Duration,
}

impl MySqlBackend {
    pub fn new(config: &StoreConfig) -> Self {
        let mut options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.database)
            .timezone(Some(config.timezone.clone()));
        if let Some(ref user) = config.user {
            options = options.username(user);
        }
        if let Some(ref password) = config.password {
            options = options.password(password);
        }

        // Connections are opened lazily; `test_connection` is what proves the store is reachable.
        let pool = MySqlPoolOptions::new()
            .max_connections(config.connection_limit)
            .acquire_timeout(config.timeout)
            .connect_lazy_with(options);

        Self {
            pool,
            timeout: config.timeout,
        }
    }

    /// Runs one statement under the store timeout. The pooled connection it
    /// used is back in the pool by the time this returns, whatever the outcome.
    async fn bounded<T, F>(&self, statement: F) -> Result<T, CatalogError>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        match tokio::time::timeout(self.timeout, statement).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(CatalogError::StoreUnavailable(format!(
                "store call exceeded {:?}",
                self.timeout
            ))),
        }
    }
}

#[async_trait]
impl BookStore for MySqlBackend {
    async fn books_by_prefix(
        &self,
        prefix: &str,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<BookRecord>, CatalogError> {
        let rows = self
            .bounded(
                sqlx::query(SQL_BOOKS_BY_PREFIX)
                    .bind(like_prefix_pattern(prefix))
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool),
            )
            .await?;

        rows.iter()
            .map(|row| book_from_row(row).map_err(CatalogError::from))
            .collect()
    }

    async fn count_by_prefix(&self, prefix: &str) -> Result<u64, CatalogError> {
        let row = self
            .bounded(
                sqlx::query(SQL_COUNT_BY_PREFIX)
                    .bind(like_prefix_pattern(prefix))
                    .fetch_one(&self.pool),
            )
            .await?;

        let count: i64 = row.try_get("count")?;
        Ok(count.max(0) as u64)
    }

    async fn book_by_id(&self, book_id: i64) -> Result<Option<BookRecord>, CatalogError> {
        let row = self
            .bounded(
                sqlx::query(SQL_BOOK_BY_ID)
                    .bind(book_id)
                    .fetch_optional(&self.pool),
            )
            .await?;

        match row {
            Some(row) => Ok(Some(book_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn title_by_id(&self, book_id: i64) -> Result<Option<String>, CatalogError> {
        let row = self
            .bounded(
                sqlx::query(SQL_TITLE_BY_ID)
                    .bind(book_id)
                    .fetch_optional(&self.pool),
            )
            .await?;

        match row {
            Some(row) => Ok(Some(
                row.try_get::<Option<String>, _>("title")?.unwrap_or_default(),
            )),
            None => Ok(None),
        }
    }

    async fn test_connection(&self) -> Result<(), CatalogError> {
        self.bounded(sqlx::query("SELECT 1").fetch_one(&self.pool))
            .await?;
        Ok(())
    }
}
