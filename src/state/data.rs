/// Shared data structures for the catalog
///
/// These structs represent the data model that flows between
/// the catalog store and the UI layer.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Deserialize;
use std::sync::Arc;

/// Represents a single book in the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookRecord {
    /// Unique book ID
    pub id: String,
    /// Display title
    pub title: String,
    /// Key into the author table
    #[serde(rename = "author")]
    pub author_id: String,
    /// Keys into the genre table, in dataset order
    #[serde(rename = "genres", default)]
    pub genre_ids: Vec<String>,
    /// Cover image URI (local path or remote URL)
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    /// Publication timestamp (RFC 3339)
    #[serde(rename = "published")]
    pub published_date: DateTime<Utc>,
}

/// Maps an identifier to its display name.
///
/// Insertion order is kept so selector options appear in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct LookupTable(IndexMap<String, String>);

/// Author ID -> author name
pub type AuthorTable = LookupTable;
/// Genre ID -> genre name
pub type GenreTable = LookupTable;

impl LookupTable {
    /// Resolve an ID to its display name
    pub fn name(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Iterate `(id, name)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for LookupTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A shared, immutable handle to a book.
///
/// Every component downstream of the catalog holds these instead of copies.
pub type BookRef = Arc<BookRecord>;
