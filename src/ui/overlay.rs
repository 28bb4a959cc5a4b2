/// Modal dialogs: book detail, search, settings
use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, pick_list, row,
    stack, text, text_input,
};
use iced::{Color, Element, Length};

use super::grid::cover;
use super::search::{SearchForm, SelectOption};
use crate::color::ThemePreference;
use crate::state::detail::DetailView;
use crate::Message;

const DIALOG_WIDTH: f32 = 520.0;

/// Draw `content` centered over a dimmed `base`.
/// Clicking the backdrop sends `on_blur`.
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| container::Style {
                background: Some(Color { a: 0.8, ..Color::BLACK }.into()),
                ..container::Style::default()
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

fn dialog<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fixed(DIALOG_WIDTH))
        .padding(20)
        .style(container::rounded_box)
        .into()
}

/// Book detail: cover, title, "Author (Year)", description
pub fn detail(view: &DetailView) -> Element<'_, Message> {
    dialog(
        column![
            container(cover(&view.image, 200.0, 290.0)).center_x(Length::Fill),
            text(view.title.as_str()).size(24),
            text(view.subtitle.as_str()).size(16),
            text(view.description.as_str()).size(14),
            row![
                horizontal_space(),
                button("Close").on_press(Message::CloseDetail).padding(10),
            ],
        ]
        .spacing(12),
    )
}

/// Search form: title, genre, author
pub fn search<'a>(
    form: &'a SearchForm,
    genres: &'a [SelectOption],
    authors: &'a [SelectOption],
) -> Element<'a, Message> {
    dialog(
        column![
            text("Search").size(24),
            text_input("Any", &form.title)
                .on_input(Message::SearchTitleChanged)
                .on_submit(Message::SubmitSearch)
                .padding(8),
            text("Genre").size(14),
            pick_list(genres, Some(&form.genre), Message::SearchGenreSelected)
                .width(Length::Fill),
            text("Author").size(14),
            pick_list(authors, Some(&form.author), Message::SearchAuthorSelected)
                .width(Length::Fill),
            row![
                horizontal_space(),
                button("Cancel")
                    .on_press(Message::CancelSearch)
                    .style(button::secondary)
                    .padding(10),
                button("Search").on_press(Message::SubmitSearch).padding(10),
            ]
            .spacing(10),
        ]
        .spacing(12),
    )
}

/// Theme settings
pub fn settings<'a>(choice: ThemePreference) -> Element<'a, Message> {
    dialog(
        column![
            text("Settings").size(24),
            text("Theme").size(14),
            pick_list(ThemePreference::ALL, Some(choice), Message::SettingsThemeSelected)
                .width(Length::Fill),
            row![
                horizontal_space(),
                button("Cancel")
                    .on_press(Message::CancelSettings)
                    .style(button::secondary)
                    .padding(10),
                button("Save").on_press(Message::SaveSettings).padding(10),
            ]
            .spacing(10),
        ]
        .spacing(12),
    )
}
