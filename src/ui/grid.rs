/// Book grid and "show more" control
use iced::widget::{button, column, container, image, scrollable, text};
use iced::{Element, Length, Pixels};
use iced_aw::Wrap;
use std::path::Path;

use super::surface::ListingSurface;
use crate::state::data::BookRecord;
use crate::state::library::Library;
use crate::Message;

const CARD_WIDTH: f32 = 180.0;
const COVER_WIDTH: f32 = 164.0;
const COVER_HEIGHT: f32 = 240.0;

/// Cover image for a book.
///
/// Only local files are drawn; remote URIs get a placeholder box since the
/// browser never fetches over the network.
pub fn cover<'a>(uri: &str, width: f32, height: f32) -> Element<'a, Message> {
    let path = Path::new(uri);

    if path.is_file() {
        image::Image::<image::Handle>::new(image::Handle::from_path(path))
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into()
    } else {
        container(text("No cover").size(14))
            .center_x(Length::Fixed(width))
            .center_y(Length::Fixed(height))
            .style(container::bordered_box)
            .into()
    }
}

/// A clickable preview card: cover, title, author
fn card<'a>(book: &'a BookRecord, author: &'a str) -> Element<'a, Message> {
    let content = column![
        cover(&book.image, COVER_WIDTH, COVER_HEIGHT),
        text(book.title.as_str()).size(16),
        text(author).size(13),
    ]
    .spacing(6)
    .width(Length::Fixed(CARD_WIDTH));

    button(content)
        .on_press(Message::Select(book.id.clone()))
        .style(button::text)
        .padding(8)
        .into()
}

/// The scrollable listing: grid of cards, empty message, "show more" button
pub fn listing<'a>(surface: &'a ListingSurface, library: &'a Library) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = surface
        .items
        .iter()
        .map(|book| card(book, library.author_name(&book.author_id)))
        .collect();

    let grid = Wrap::with_elements(cards)
        .spacing(Pixels(12.0))
        .line_spacing(Pixels(12.0));

    let mut content = column![].spacing(20).padding(20).width(Length::Fill);

    if surface.empty {
        content = content.push(text("No results found. Your filters might be too narrow.").size(18));
    }

    let show_more = button(text(surface.affordance.label.as_str()))
        .on_press_maybe((!surface.affordance.disabled).then_some(Message::ShowMore))
        .padding(10);

    content = content
        .push(grid)
        .push(container(show_more).center_x(Length::Fill));

    scrollable(content).height(Length::Fill).into()
}
