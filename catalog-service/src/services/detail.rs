use crate::models::book::{split_field, BookRecord};
use crate::models::error::CatalogError;
use crate::models::responses::{BookDetail, BookPayload};
use crate::utils::negotiate::Representation;

/// A formatted detail view, ready for the rendering boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutput {
    Markup(BookDetail),
    Structured(BookPayload),
}

pub fn parse_rating(stored: &str) -> Result<f64, CatalogError> {
    stored
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|rating| rating.is_finite())
        .ok_or_else(|| CatalogError::MalformedData(format!("rating {:?} is not a number", stored)))
}

pub fn split_record(record: BookRecord) -> BookDetail {
    BookDetail {
        book_id: record.book_id,
        authors: split_field(&record.authors),
        genres: split_field(&record.genres),
        title: record.title,
        description: record.description,
        pages: record.pages,
        rating: record.rating,
        rating_count: record.rating_count,
    }
}

/// Shapes the row looked up for `book_id` into the requested representation.
pub fn format_detail(
    book_id: &str,
    record: Option<BookRecord>,
    representation: Representation,
) -> Result<DetailOutput, CatalogError> {
    let record = record.ok_or_else(|| CatalogError::NotFound(book_id.to_string()))?;
    let detail = split_record(record);

    match representation {
        Representation::Markup => Ok(DetailOutput::Markup(detail)),
        Representation::Structured => Ok(DetailOutput::Structured(BookPayload {
            rating: parse_rating(&detail.rating)?,
            book_id: detail.book_id,
            title: detail.title,
            authors: detail.authors,
            summary: detail.description,
            pages: detail.pages,
            rating_count: detail.rating_count,
            genre: detail.genres,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::memory::sample_book;

    #[test]
    fn markup_keeps_record_with_split_fields() {
        let output = format_detail("7", Some(sample_book(7, "Emma")), Representation::Markup).unwrap();
        let DetailOutput::Markup(detail) = output else {
            panic!("expected markup output");
        };
        assert_eq!(detail.book_id, 7);
        assert_eq!(detail.authors, vec!["Jane Austen", "Anna Quindlen"]);
        assert_eq!(detail.genres, vec!["Classics", "Fiction", "Romance"]);
        assert_eq!(detail.rating, "4.25");
        assert_eq!(detail.description, "About Emma");
    }

    #[test]
    fn structured_renames_and_parses() {
        let output =
            format_detail("7", Some(sample_book(7, "Emma")), Representation::Structured).unwrap();
        let DetailOutput::Structured(payload) = output else {
            panic!("expected structured output");
        };
        assert_eq!(payload.summary, "About Emma");
        assert_eq!(payload.rating, 4.25);
        assert_eq!(payload.genre, vec!["Classics", "Fiction", "Romance"]);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["bookId"], 7);
        assert_eq!(json["ratingCount"], 2_452_000);
        assert!(json["rating"].is_f64());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn missing_record_is_not_found() {
        let err = format_detail("99", None, Representation::Structured).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(ref id) if id == "99"));
    }

    #[test]
    fn non_numeric_rating_is_malformed() {
        let mut book = sample_book(7, "Emma");
        book.rating = "n/a".to_string();
        let err = format_detail("7", Some(book.clone()), Representation::Structured).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedData(_)));

        // Markup passes the stored text through untouched.
        assert!(format_detail("7", Some(book), Representation::Markup).is_ok());
    }

    #[test]
    fn empty_multi_value_column_keeps_one_entry() {
        let mut book = sample_book(7, "Emma");
        book.genres = String::new();
        let DetailOutput::Markup(detail) =
            format_detail("7", Some(book), Representation::Markup).unwrap()
        else {
            panic!("expected markup output");
        };
        assert_eq!(detail.genres, vec![String::new()]);
    }
}
