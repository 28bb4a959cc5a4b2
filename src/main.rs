use iced::widget::{button, column, horizontal_space, row, text};
use iced::{Alignment, Element, Task, Theme};
use std::num::NonZeroUsize;

mod color;
mod config;
mod error;
mod state;
mod ui;

use color::{SystemProbe, ThemePreference};
use config::AppConfig;
use error::AppError;
use state::browser::{Browser, DialogHandle};
use state::library::Library;
use ui::search::{SearchForm, SelectOption, ALL_AUTHORS, ALL_GENRES};
use ui::surface::{ListingSurface, Overlay};
use ui::{grid, overlay};

/// Main application state
struct BookBrowser {
    /// The catalog (read-only for the whole session)
    library: Library,
    /// Active filter, its result and pagination
    browser: Browser,
    /// What the grid and detail dialog currently show
    listing: ListingSurface,
    detail_dialog: Overlay,
    search_dialog: Overlay,
    settings_dialog: Overlay,
    /// Search overlay fields
    search: SearchForm,
    genre_options: Vec<SelectOption>,
    author_options: Vec<SelectOption>,
    /// Theme in effect
    theme: ThemePreference,
    /// Theme picked in the settings dialog, applied on save
    settings_choice: ThemePreference,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// "Show more" clicked
    ShowMore,
    /// A preview card was clicked
    Select(String),
    CloseDetail,

    OpenSearch,
    CancelSearch,
    SearchTitleChanged(String),
    SearchGenreSelected(SelectOption),
    SearchAuthorSelected(SelectOption),
    SubmitSearch,

    OpenSettings,
    SettingsThemeSelected(ThemePreference),
    SaveSettings,
    CancelSettings,
}

impl BookBrowser {
    /// Create the application and render the first page of the catalog
    fn new(library: Library, page_size: NonZeroUsize, theme: ThemePreference) -> (Self, Task<Message>) {
        let mut listing = ListingSurface::default();
        let browser = Browser::open(&library, page_size, &mut listing);

        let genre_options = SelectOption::from_table(library.genres(), ALL_GENRES);
        let author_options = SelectOption::from_table(library.authors(), ALL_AUTHORS);

        log::info!(
            "🎨 Book Browser initialized with {} books, {} theme",
            library.book_count(),
            theme
        );

        (
            BookBrowser {
                library,
                browser,
                listing,
                detail_dialog: Overlay::default(),
                search_dialog: Overlay::default(),
                settings_dialog: Overlay::default(),
                search: SearchForm::default(),
                genre_options,
                author_options,
                theme,
                settings_choice: theme,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowMore => {
                self.browser.show_more(&mut self.listing);
            }
            Message::Select(book_id) => {
                self.browser.select(
                    &self.library,
                    &book_id,
                    &mut self.listing,
                    &mut self.detail_dialog,
                );
            }
            Message::CloseDetail => {
                self.detail_dialog.close();
            }

            Message::OpenSearch => {
                // Every search starts from a blank form
                self.search.reset();
                self.search_dialog.show();
            }
            Message::CancelSearch => {
                self.search_dialog.close();
            }
            Message::SearchTitleChanged(title) => {
                self.search.title = title;
            }
            Message::SearchGenreSelected(option) => {
                self.search.genre = option;
            }
            Message::SearchAuthorSelected(option) => {
                self.search.author = option;
            }
            Message::SubmitSearch => {
                let criteria = self.search.criteria();
                self.browser
                    .apply_filter(&self.library, criteria, &mut self.listing);
                self.search_dialog.close();
            }

            Message::OpenSettings => {
                self.settings_choice = self.theme;
                self.settings_dialog.show();
            }
            Message::SettingsThemeSelected(choice) => {
                self.settings_choice = choice;
            }
            Message::SaveSettings => {
                self.theme = self.settings_choice;
                let (background, foreground) = self.theme.resolve();
                log::info!(
                    "🎨 Theme set to {} (background {}, foreground {})",
                    self.theme,
                    background,
                    foreground
                );
                self.settings_dialog.close();
            }
            Message::CancelSettings => {
                // Revert the form to the theme in effect
                self.settings_choice = self.theme;
                self.settings_dialog.close();
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let header = row![
            text("Book Catalog").size(28),
            horizontal_space(),
            button("Search").on_press(Message::OpenSearch).padding(10),
            button("Settings").on_press(Message::OpenSettings).padding(10),
        ]
        .spacing(10)
        .padding(20)
        .align_y(Alignment::Center);

        let base = column![header, grid::listing(&self.listing, &self.library)];

        if let (true, Some(view)) = (self.detail_dialog.is_open(), &self.listing.detail) {
            overlay::modal(base, overlay::detail(view), Message::CloseDetail)
        } else if self.search_dialog.is_open() {
            overlay::modal(
                base,
                overlay::search(&self.search, &self.genre_options, &self.author_options),
                Message::CancelSearch,
            )
        } else if self.settings_dialog.is_open() {
            overlay::modal(
                base,
                overlay::settings(self.settings_choice),
                Message::CancelSettings,
            )
        } else {
            base.into()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.theme.to_theme()
    }
}

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // A broken config or catalog is fatal: never start with a degraded UI
    let config = AppConfig::load().inspect_err(|e| log::error!("❌ {}", e))?;
    let page_size = config
        .pagination
        .page_size()
        .inspect_err(|e| log::error!("❌ {}", e))?;

    let library = match &config.dataset {
        Some(path) => Library::load(path),
        None => Library::bundled(),
    }
    .inspect_err(|e| log::error!("❌ {}", e))?;

    let theme = config.initial_theme(&SystemProbe);

    iced::application("Book Browser", BookBrowser::update, BookBrowser::view)
        .theme(BookBrowser::theme)
        .centered()
        .run_with(move || BookBrowser::new(library, page_size, theme))?;

    Ok(())
}
