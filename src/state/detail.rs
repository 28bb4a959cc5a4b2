/// Display fields for the book detail dialog
use chrono::Datelike;

use super::data::{AuthorTable, BookRecord};

/// Everything the detail dialog shows for one book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub image: String,
    pub title: String,
    /// "Author Name (Year)"
    pub subtitle: String,
    pub description: String,
}

/// Derive the detail view for a book.
///
/// An author missing from the table leaves only the year.
pub fn present(book: &BookRecord, authors: &AuthorTable) -> DetailView {
    let year = book.published_date.year();
    let subtitle = match authors.name(&book.author_id) {
        Some(author) => format!("{} ({})", author, year),
        None => format!("({})", year),
    };

    DetailView {
        image: book.image.clone(),
        title: book.title.clone(),
        subtitle,
        description: book.description.clone(),
    }
}
