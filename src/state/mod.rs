/// State management module
///
/// This module handles all catalog state, including:
/// - Shared data structures (data.rs)
/// - The immutable catalog store (library.rs)
/// - Filtering (filter.rs) and "show more" pagination (pagination.rs)
/// - Detail dialog fields (detail.rs)
/// - The browsing session that ties them together (browser.rs)

pub mod browser;
pub mod data;
pub mod detail;
pub mod filter;
pub mod library;
pub mod pagination;
