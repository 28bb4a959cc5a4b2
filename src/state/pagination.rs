/// Incremental "show more" pagination over a filtered result
///
/// `PaginationState` is a plain value. Each step returns a new state
/// instead of mutating a counter, so the listing can never drift from
/// the result it was computed for.

use std::num::NonZeroUsize;

use super::data::BookRef;

/// Default number of books revealed per page
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(36) {
    Some(size) => size,
    None => unreachable!(),
};

/// How far into the current result the view has been materialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_size: NonZeroUsize,
    shown: usize,
}

/// One step of pagination: the records to append plus what is left after them
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub records: Vec<BookRef>,
    pub remaining_after_batch: usize,
}

/// Label and enabled state of the "show more" control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    pub label: String,
    pub disabled: bool,
}

impl PaginationState {
    /// A fresh state with nothing shown yet
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page_size, shown: 0 }
    }

    /// Number of records already materialized
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Same page size, counter back to zero
    pub fn reset(self) -> Self {
        Self::new(self.page_size)
    }

    /// Take the next page of `result`.
    ///
    /// Returns the batch and the state after it. Calling this past the end
    /// yields an empty batch and an unchanged state.
    pub fn next_batch(self, result: &[BookRef]) -> (Batch, PaginationState) {
        let start = self.shown.min(result.len());
        let remaining = result.len() - start;
        let batch_size = remaining.min(self.page_size.get());

        let batch = Batch {
            records: result[start..start + batch_size].to_vec(),
            remaining_after_batch: remaining - batch_size,
        };
        let next = PaginationState {
            page_size: self.page_size,
            shown: start + batch_size,
        };

        (batch, next)
    }
}

impl Batch {
    /// The "show more" control state after this batch is on screen
    pub fn affordance(&self) -> Affordance {
        Affordance::for_remaining(self.remaining_after_batch)
    }
}

impl Affordance {
    /// Disabled exactly when nothing is left to show
    pub fn for_remaining(remaining: usize) -> Self {
        Self {
            label: format!("Show more ({})", remaining),
            disabled: remaining == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::BookRecord;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn catalog(len: usize) -> Vec<BookRef> {
        (0..len)
            .map(|i| {
                Arc::new(BookRecord {
                    id: i.to_string(),
                    title: format!("Book {}", i),
                    author_id: "a".to_string(),
                    genre_ids: Vec::new(),
                    image: String::new(),
                    description: String::new(),
                    published_date: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
                })
            })
            .collect()
    }

    fn page(size: usize) -> NonZeroUsize {
        NonZeroUsize::new(size).unwrap()
    }

    #[test]
    fn test_fifty_books_in_pages_of_36() {
        let books = catalog(50);
        let state = PaginationState::new(DEFAULT_PAGE_SIZE);

        let (first, state) = state.next_batch(&books);
        assert_eq!(first.records.len(), 36);
        assert_eq!(first.records[0].id, "0");
        assert_eq!(first.remaining_after_batch, 14);
        assert_eq!(
            first.affordance(),
            Affordance { label: "Show more (14)".to_string(), disabled: false }
        );

        let (second, state) = state.next_batch(&books);
        assert_eq!(second.records.len(), 14);
        assert_eq!(second.records[0].id, "36");
        assert_eq!(second.remaining_after_batch, 0);
        assert!(second.affordance().disabled);

        let (third, state) = state.next_batch(&books);
        assert!(third.records.is_empty());
        assert_eq!(third.remaining_after_batch, 0);
        assert_eq!(state.shown(), 50);
    }

    #[test]
    fn test_batch_size_bound_and_monotonicity() {
        for len in [0, 1, 5, 7, 12, 13] {
            let books = catalog(len);
            let mut state = PaginationState::new(page(5));
            for _ in 0..=len / 5 + 1 {
                let (batch, next) = state.next_batch(&books);

                assert_eq!(batch.records.len(), 5.min(len - state.shown()));
                assert!(next.shown() >= state.shown());
                assert!(next.shown() <= len);
                assert_eq!(batch.remaining_after_batch, len - next.shown());
                state = next;
            }
            assert_eq!(state.shown(), len);
        }
    }

    #[test]
    fn test_disabled_iff_nothing_remaining() {
        let books = catalog(10);
        let mut state = PaginationState::new(page(4));
        loop {
            let (batch, next) = state.next_batch(&books);
            assert_eq!(batch.affordance().disabled, batch.remaining_after_batch == 0);
            if batch.records.is_empty() {
                break;
            }
            state = next;
        }
        assert_eq!(state.shown(), 10);
    }

    #[test]
    fn test_empty_result_disables_immediately() {
        let (batch, state) = PaginationState::new(page(36)).next_batch(&[]);
        assert!(batch.records.is_empty());
        assert_eq!(batch.affordance().label, "Show more (0)");
        assert!(batch.affordance().disabled);
        assert_eq!(state.shown(), 0);
    }

    #[test]
    fn test_reset_keeps_page_size() {
        let books = catalog(8);
        let (_, state) = PaginationState::new(page(3)).next_batch(&books);
        assert_eq!(state.shown(), 3);

        let state = state.reset();
        assert_eq!(state.shown(), 0);

        let (batch, _) = state.next_batch(&books);
        assert_eq!(batch.records[0].id, "0");
        assert_eq!(batch.records.len(), 3);
        assert_eq!(batch.remaining_after_batch, 5);
    }
}
