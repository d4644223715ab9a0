use serde::{Deserialize, Serialize};

/// Separator used by the store for multi-value columns (`authors`, `genres`).
pub const FIELD_DELIMITER: char = '|';

/// One row of the book table, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub book_id: i64,
    pub title: String,
    pub authors: String,
    pub genres: String,
    pub description: String,
    pub pages: i64,
    pub rating: String,
    pub rating_count: i64,
}

/// Splits a pipe-delimited column into its ordered values.
///
/// An empty column yields a single empty value, so joining the result with
/// [`FIELD_DELIMITER`] always reproduces the stored text.
pub fn split_field(stored: &str) -> Vec<String> {
    stored.split(FIELD_DELIMITER).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_in_order() {
        assert_eq!(
            split_field("Jane Austen|Anna Quindlen"),
            vec!["Jane Austen", "Anna Quindlen"]
        );
    }

    #[test]
    fn empty_column_is_one_empty_value() {
        assert_eq!(split_field(""), vec![String::new()]);
    }

    #[test]
    fn join_restores_stored_text() {
        for stored in ["Fiction", "Classics|Romance|Fiction", "|trailing|", ""] {
            let parts = split_field(stored);
            assert_eq!(parts.len(), stored.matches(FIELD_DELIMITER).count() + 1);
            assert_eq!(parts.join("|"), stored);
        }
    }
}
