use crate::state::browser::{CatalogSurface, DialogHandle};
use crate::state::data::BookRef;
use crate::state::detail::DetailView;
use crate::state::pagination::Affordance;

/// What the main view draws, as last told by the browser controller
#[derive(Debug, Clone)]
pub struct ListingSurface {
    /// Books currently materialized in the grid
    pub items: Vec<BookRef>,
    /// "Show more" button state
    pub affordance: Affordance,
    /// Contents of the detail dialog
    pub detail: Option<DetailView>,
    /// Show the "No results found" message
    pub empty: bool,
}

impl Default for ListingSurface {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            affordance: Affordance::for_remaining(0),
            detail: None,
            empty: false,
        }
    }
}

impl CatalogSurface for ListingSurface {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn render(&mut self, batch: &[BookRef]) {
        self.items.extend(batch.iter().cloned());
    }

    fn show_detail(&mut self, view: DetailView) {
        self.detail = Some(view);
    }

    fn set_affordance(&mut self, affordance: Affordance) {
        self.affordance = affordance;
    }

    fn set_empty_message(&mut self, visible: bool) {
        self.empty = visible;
    }
}

/// Open/closed flag for a modal overlay
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay {
    open: bool,
}

impl DialogHandle for Overlay {
    fn show(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
