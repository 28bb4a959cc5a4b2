/// Browsing session controller
///
/// Owns the active filter, its result and the pagination state, and
/// pushes every change out through `CatalogSurface` and `DialogHandle`.
/// It never touches widgets directly.

use std::num::NonZeroUsize;

use super::data::BookRef;
use super::detail::{self, DetailView};
use super::filter::{self, FilterCriteria};
use super::library::Library;
use super::pagination::{Affordance, PaginationState};

/// Where the listing is drawn
pub trait CatalogSurface {
    /// Remove every rendered book
    fn clear(&mut self);
    /// Append a batch of books to the listing
    fn render(&mut self, batch: &[BookRef]);
    /// Fill the detail dialog
    fn show_detail(&mut self, view: DetailView);
    /// Update the "show more" control
    fn set_affordance(&mut self, affordance: Affordance);
    /// Toggle the "no results" message
    fn set_empty_message(&mut self, visible: bool);
}

/// A dialog that can be opened and dismissed
pub trait DialogHandle {
    fn show(&mut self);
    fn close(&mut self);
    fn is_open(&self) -> bool;
}

/// State of one browsing session
#[derive(Debug, Clone)]
pub struct Browser {
    criteria: FilterCriteria,
    result: Vec<BookRef>,
    pagination: PaginationState,
}

impl Browser {
    /// Render the first page of the unfiltered catalog
    pub fn open(library: &Library, page_size: NonZeroUsize, surface: &mut dyn CatalogSurface) -> Self {
        let mut browser = Browser {
            criteria: FilterCriteria::all(),
            result: library.books().to_vec(),
            pagination: PaginationState::new(page_size),
        };

        surface.clear();
        surface.set_empty_message(false);
        browser.show_more(surface);
        browser
    }

    /// Replace the active filter and show the first page of its result
    pub fn apply_filter(
        &mut self,
        library: &Library,
        criteria: FilterCriteria,
        surface: &mut dyn CatalogSurface,
    ) {
        self.result = filter::filter(library.books(), &criteria, library.genres(), library.authors());
        self.pagination = self.pagination.reset();

        if criteria.is_unfiltered() {
            log::info!("🔍 Showing the full catalog ({} books)", self.result.len());
        } else {
            log::info!(
                "🔍 Filter {:?}: {} of {} books match",
                criteria,
                self.result.len(),
                library.book_count()
            );
        }
        self.criteria = criteria;

        surface.clear();
        surface.set_empty_message(self.result.is_empty());
        self.show_more(surface);
    }

    /// Append the next page to the listing.
    /// Returns how many books were added.
    pub fn show_more(&mut self, surface: &mut dyn CatalogSurface) -> usize {
        let (batch, next) = self.pagination.next_batch(&self.result);

        surface.render(&batch.records);
        surface.set_affordance(batch.affordance());
        self.pagination = next;

        log::debug!(
            "📖 Showing {} of {} books ({} more) for {:?}",
            self.pagination.shown(),
            self.result.len(),
            batch.remaining_after_batch,
            self.criteria
        );
        batch.records.len()
    }

    /// Open the detail dialog for a book on screen.
    ///
    /// Returns false (and leaves the dialog alone) if the book hasn't been
    /// rendered from the active result.
    pub fn select(
        &self,
        library: &Library,
        book_id: &str,
        surface: &mut dyn CatalogSurface,
        dialog: &mut dyn DialogHandle,
    ) -> bool {
        let shown = &self.result[..self.pagination.shown()];
        let Some(book) = shown.iter().find(|book| book.id == book_id) else {
            log::debug!("Ignoring selection of {} outside the shown books", book_id);
            return false;
        };

        surface.show_detail(detail::present(book, library.authors()));
        dialog.show();
        true
    }
}
