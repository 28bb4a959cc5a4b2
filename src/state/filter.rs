/// Catalog filtering
///
/// A search narrows the catalog by title fragment, author and genre.
/// The output keeps catalog order and shares the original records.

use super::data::{AuthorTable, BookRecord, BookRef, GenreTable};

/// What the user asked for in the search overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the title; empty matches everything
    pub title_fragment: String,
    /// Exact author ID, or `None` for all authors
    pub author_id: Option<String>,
    /// Genre ID, or `None` for all genres
    pub genre_id: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match the whole catalog
    pub fn all() -> Self {
        Self::default()
    }

    /// Build criteria from raw form values.
    ///
    /// Empty selector values mean "all", the same as the "All Genres" /
    /// "All Authors" options.
    pub fn from_form(title: &str, genre_id: &str, author_id: &str) -> Self {
        fn selected(value: &str) -> Option<String> {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        }

        Self {
            title_fragment: title.to_string(),
            author_id: selected(author_id),
            genre_id: selected(genre_id),
        }
    }

    /// True when no predicate narrows the catalog
    pub fn is_unfiltered(&self) -> bool {
        self.title_fragment.is_empty() && self.author_id.is_none() && self.genre_id.is_none()
    }
}

/// Return the books matching all three predicates, in catalog order.
///
/// Unknown author or genre IDs in the criteria match nothing.
pub fn filter(
    catalog: &[BookRef],
    criteria: &FilterCriteria,
    genres: &GenreTable,
    authors: &AuthorTable,
) -> Vec<BookRef> {
    let title = criteria.title_fragment.to_lowercase();

    // Resolve the wanted genre once. `Some(None)` is a dangling ID.
    let wanted_genre = criteria
        .genre_id
        .as_deref()
        .map(|id| genres.name(id).map(str::to_lowercase));

    // The author must exist in the table to match anything.
    let wanted_author = criteria
        .author_id
        .as_deref()
        .map(|id| authors.name(id).map(|_| id));

    catalog
        .iter()
        .filter(|book| {
            matches_title(book, &title)
                && matches_genre(book, wanted_genre.as_ref(), genres)
                && matches_author(book, wanted_author)
        })
        .cloned()
        .collect()
}

fn matches_title(book: &BookRecord, fragment_lower: &str) -> bool {
    fragment_lower.is_empty() || book.title.to_lowercase().contains(fragment_lower)
}

fn matches_genre(book: &BookRecord, wanted: Option<&Option<String>>, genres: &GenreTable) -> bool {
    match wanted {
        None => true,
        Some(None) => false,
        Some(Some(name)) => book
            .genre_ids
            .iter()
            .filter_map(|id| genres.name(id))
            .any(|book_genre| book_genre.to_lowercase() == *name),
    }
}

fn matches_author(book: &BookRecord, wanted: Option<Option<&str>>) -> bool {
    match wanted {
        None => true,
        Some(None) => false,
        Some(Some(id)) => book.author_id == id,
    }
}
