use crate::models::book::BookRecord;
use crate::models::error::CatalogError;
use crate::models::storage::BookStore;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-process book table for tests.
#[derive(Default)]
pub struct MemoryBackend {
    books: Vec<BookRecord>,
    unavailable: bool,
    calls: AtomicUsize,
}

impl MemoryBackend {
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self {
            books,
            ..Self::default()
        }
    }

    /// A backend whose every call fails as if the store were down.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(CatalogError::StoreUnavailable(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }

    fn matching<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a BookRecord> + 'a {
        self.books
            .iter()
            .filter(move |book| book.title.starts_with(prefix))
    }
}

#[async_trait]
impl BookStore for MemoryBackend {
    async fn books_by_prefix(
        &self,
        prefix: &str,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<BookRecord>, CatalogError> {
        self.check()?;
        Ok(self
            .matching(prefix)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count_by_prefix(&self, prefix: &str) -> Result<u64, CatalogError> {
        self.check()?;
        Ok(self.matching(prefix).count() as u64)
    }

    async fn book_by_id(&self, book_id: i64) -> Result<Option<BookRecord>, CatalogError> {
        self.check()?;
        Ok(self.books.iter().find(|b| b.book_id == book_id).cloned())
    }

    async fn title_by_id(&self, book_id: i64) -> Result<Option<String>, CatalogError> {
        self.check()?;
        Ok(self
            .books
            .iter()
            .find(|b| b.book_id == book_id)
            .map(|b| b.title.clone()))
    }

    async fn test_connection(&self) -> Result<(), CatalogError> {
        self.check()
    }
}

pub fn sample_book(book_id: i64, title: &str) -> BookRecord {
    BookRecord {
        book_id,
        title: title.to_string(),
        authors: "Jane Austen|Anna Quindlen".to_string(),
        genres: "Classics|Fiction|Romance".to_string(),
        description: format!("About {}", title),
        pages: 279,
        rating: "4.25".to_string(),
        rating_count: 2_452_000,
    }
}

/// `count` books titled "<letter> book NN" plus a few under other letters.
pub fn catalog_with(letter: &str, count: usize) -> Vec<BookRecord> {
    let mut books: Vec<BookRecord> = (0..count)
        .map(|i| sample_book(1000 + i as i64, &format!("{} book {:02}", letter, i)))
        .collect();
    books.push(sample_book(1, "zebra"));
    books.push(sample_book(2, "1984"));
    books.push(sample_book(3, "Upper case"));
    books
}
