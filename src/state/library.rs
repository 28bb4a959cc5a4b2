use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use super::data::{AuthorTable, BookRecord, BookRef, GenreTable};
use crate::error::CatalogError;

/// Sample catalog shipped with the binary, used when no dataset is configured
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// On-disk shape of a catalog file
#[derive(Deserialize)]
struct CatalogFile {
    books: Vec<BookRecord>,
    #[serde(default)]
    authors: AuthorTable,
    #[serde(default)]
    genres: GenreTable,
}

/// The Library is the catalog store.
/// It owns the immutable book collection and the author/genre lookup tables.
/// Nothing in it changes after load.
pub struct Library {
    books: Vec<BookRef>,
    authors: AuthorTable,
    genres: GenreTable,
}

impl Library {
    /// Build a library from already-parsed parts.
    ///
    /// Fails if there are no books or two books share an ID. Author and genre
    /// references are not checked: dangling keys resolve to blank names later.
    pub fn new(
        books: Vec<BookRecord>,
        authors: AuthorTable,
        genres: GenreTable,
    ) -> Result<Self, CatalogError> {
        if books.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(CatalogError::DuplicateId(book.id.clone()));
            }
        }

        Ok(Library {
            books: books.into_iter().map(Arc::new).collect(),
            authors,
            genres,
        })
    }

    /// Parse a catalog from its JSON text
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.books, file.authors, file.genres)
    }

    /// Load a catalog from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let library = Self::from_json(&json)?;
        log::info!("📚 Loaded {} books from {}", library.book_count(), path.display());
        Ok(library)
    }

    /// Load the sample catalog compiled into the binary
    pub fn bundled() -> Result<Self, CatalogError> {
        let library = Self::from_json(BUNDLED_CATALOG)?;
        log::info!("📚 Loaded {} books from bundled catalog", library.book_count());
        Ok(library)
    }

    /// All books, in catalog order
    pub fn books(&self) -> &[BookRef] {
        &self.books
    }

    pub fn authors(&self) -> &AuthorTable {
        &self.authors
    }

    pub fn genres(&self) -> &GenreTable {
        &self.genres
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Resolve an author ID to a display name; unknown IDs resolve to ""
    pub fn author_name(&self, author_id: &str) -> &str {
        self.authors.name(author_id).unwrap_or_default()
    }
}

// Implement Debug without dumping every book
impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("books", &self.books.len())
            .field("authors", &self.authors.iter().count())
            .field("genres", &self.genres.iter().count())
            .finish()
    }
}
