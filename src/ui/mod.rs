/// User interface module
///
/// Everything that draws:
/// - The book grid and "show more" button (grid.rs)
/// - Modal dialogs for detail, search and settings (overlay.rs)
/// - Search form state (search.rs)
/// - The surface/dialog implementations the browser controller talks to (surface.rs)

pub mod grid;
pub mod overlay;
pub mod search;
pub mod surface;
