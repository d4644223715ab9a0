//! Offset arithmetic and page assembly for the letter listing.

use crate::models::error::CatalogError;
use crate::models::responses::PageResult;
use crate::models::storage::BookStore;
use tracing::info;

pub const PAGE_SIZE: u64 = 10;

/// Which way the visitor asked to move through the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    Absent,
}

impl Navigation {
    /// Only the exact value `next` advances; any other value counts as `Previous`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("next") => Navigation::Next,
            Some(_) => Navigation::Previous,
            None => Navigation::Absent,
        }
    }
}

/// Reads the offset carried over from the previous page. Unparseable input is 0,
/// negative input is clamped to 0.
pub fn parse_offset(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .map(|offset| offset.max(0) as u64)
        .unwrap_or(0)
}

/// Moves `previous` one page in the requested direction.
///
/// A missing signal steps back exactly like `Previous`, so a first visit
/// (offset 0, no signal) stays on the first page.
pub fn step_offset(previous: u64, navigation: Navigation) -> u64 {
    match navigation {
        Navigation::Next => previous.saturating_add(PAGE_SIZE),
        Navigation::Previous | Navigation::Absent => previous.saturating_sub(PAGE_SIZE),
    }
}

pub fn previous_enabled(offset: u64) -> bool {
    offset > 0
}

/// True while rows remain past the page starting at `offset`.
pub fn next_enabled(offset: u64, total: u64) -> bool {
    offset.saturating_add(PAGE_SIZE) < total
}

/// Computes the new offset, then fetches one page of rows and the matching
/// total concurrently and derives the button states from them.
pub async fn paginate<S>(
    store: &S,
    letter: &str,
    raw_offset: Option<&str>,
    navigation: Navigation,
) -> Result<PageResult, CatalogError>
where
    S: BookStore + Send + Sync + ?Sized,
{
    let offset = step_offset(parse_offset(raw_offset), navigation);

    // The two reads are independent; the count may drift from the rows under concurrent writes.
    let (rows, total) = tokio::try_join!(
        store.books_by_prefix(letter, PAGE_SIZE, offset),
        store.count_by_prefix(letter),
    )?;

    info!(
        "Listing '{}' at offset {}: {} rows of {}",
        letter,
        offset,
        rows.len(),
        total
    );

    Ok(PageResult {
        rows,
        letter: letter.to_string(),
        previous_enabled: previous_enabled(offset),
        next_enabled: next_enabled(offset, total),
        offset,
    })
}
