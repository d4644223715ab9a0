//! Server-side HTML for the browsing pages. All interpolated text goes
//! through [`escape`].

use crate::models::responses::{BookDetail, PageResult, ReviewPage};
use reqwest::Url;
use std::fmt::Write;

/// Letter buttons on the landing page, one row per band.
pub const LETTER_BANDS: [&[&str]; 8] = [
    &["a", "b", "c", "d", "e"],
    &["f", "g", "h", "i", "j"],
    &["k", "l", "m", "n", "o"],
    &["p", "q", "r", "s", "t"],
    &["u", "v", "w", "x", "y"],
    &["z"],
    &["0", "1", "2", "3", "4"],
    &["5", "6", "7", "8", "9"],
];

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Path of the listing for `letter`, with the letter percent-encoded as one segment.
pub fn listing_path(letter: &str) -> String {
    let mut url = match Url::parse("http://catalog.local/book") {
        Ok(url) => url,
        Err(_) => return format!("/book/{}", letter),
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(letter);
    }
    url.path().to_string()
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<link rel=\"stylesheet\" href=\"/css/style.css\">\n</head>\n\
         <body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

pub fn landing() -> String {
    let mut body = String::from("<h1>Goodreads 2018</h1>\n<p>Browse titles by their first character.</p>\n");
    for band in LETTER_BANDS.iter() {
        body.push_str("<div class=\"band\">\n");
        for letter in band.iter() {
            let _ = writeln!(
                body,
                "<a class=\"letter\" href=\"{}\">{}</a>",
                escape(&listing_path(letter)),
                escape(letter)
            );
        }
        body.push_str("</div>\n");
    }
    layout("Goodreads 2018", &body)
}

fn nav_link(label: &str, letter: &str, offset: u64, signal: &str, enabled: bool) -> String {
    if enabled {
        format!(
            "<a class=\"nav\" href=\"{}?offset={}&amp;btnState={}\">{}</a>",
            escape(&listing_path(letter)),
            offset,
            signal,
            label
        )
    } else {
        format!("<span class=\"nav disabled\">{}</span>", label)
    }
}

pub fn listing(page: &PageResult) -> String {
    let letter = escape(&page.letter);
    let mut body = format!("<h1>Titles beginning with &quot;{}&quot;</h1>\n", letter);

    if page.rows.is_empty() {
        body.push_str("<p>No titles found.</p>\n");
    } else {
        let _ = writeln!(body, "<ol start=\"{}\">", page.offset + 1);
        for book in &page.rows {
            let _ = writeln!(
                body,
                "<li><a href=\"/book/detail/{}\">{}</a></li>",
                book.book_id,
                escape(&book.title)
            );
        }
        body.push_str("</ol>\n");
    }

    let _ = writeln!(
        body,
        "<nav>\n{}\n{}\n</nav>\n<p><a href=\"/\">Back</a></p>",
        nav_link("Previous", &page.letter, page.offset, "previous", page.previous_enabled),
        nav_link("Next", &page.letter, page.offset, "next", page.next_enabled)
    );

    layout(&format!("Titles: {}", page.letter), &body)
}

fn list_items(values: &[String]) -> String {
    values
        .iter()
        .map(|value| format!("<li>{}</li>", escape(value)))
        .collect::<Vec<_>>()
        .join("")
}

pub fn detail(book: &BookDetail) -> String {
    let body = format!(
        "<h1>{title}</h1>\n\
         <dl>\n\
         <dt>Authors</dt><dd><ul>{authors}</ul></dd>\n\
         <dt>Summary</dt><dd>{summary}</dd>\n\
         <dt>Pages</dt><dd>{pages}</dd>\n\
         <dt>Rating</dt><dd>{rating} ({rating_count} ratings)</dd>\n\
         <dt>Genres</dt><dd><ul>{genres}</ul></dd>\n\
         </dl>\n\
         <p><a href=\"/book/detail/{id}/review\">Reviews</a></p>\n\
         <p><a href=\"/\">Back</a></p>\n",
        title = escape(&book.title),
        authors = list_items(&book.authors),
        summary = escape(&book.description),
        pages = book.pages,
        rating = escape(&book.rating),
        rating_count = book.rating_count,
        genres = list_items(&book.genres),
        id = book.book_id,
    );
    layout(&book.title, &body)
}

pub fn reviews(page: &ReviewPage) -> String {
    let mut body = format!("<h1>Reviews of {}</h1>\n", escape(&page.title));

    if !page.has_results {
        body.push_str("<p>No reviews found.</p>\n");
    }
    for review in &page.reviews {
        let _ = writeln!(
            body,
            "<article>\n<h2>{}</h2>\n<p>by {}</p>\n<p>Reviewed {} {}</p>\n<p>{}</p>\n\
             <p>ISBN: {}</p>\n<p><a href=\"{}\">Read the review</a></p>\n</article>",
            escape(&review.book_title),
            escape(&review.book_author),
            escape(&review.publication_dt),
            escape(&review.byline),
            escape(&review.summary),
            escape(&review.isbn13.join(", ")),
            escape(&review.url)
        );
    }
    body.push_str("<p><a href=\"/\">Back</a></p>\n");

    layout(&format!("Reviews: {}", page.title), &body)
}

pub fn not_found() -> String {
    layout(
        "Not found",
        "<h1>Page not found</h1>\n<p><a href=\"/\">Back to the catalog</a></p>\n",
    )
}
