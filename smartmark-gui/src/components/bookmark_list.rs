use iced::{
    Element, Length,
    widget::{Column, button, column, container, row, scrollable, space, text},
};
use smartmark_lib::{Bookmark, BookmarkId, Session};

#[derive(Debug, Clone)]
pub enum Message {
    EditPressed(Bookmark),
    DeletePressed(BookmarkId),
}

pub fn view(session: &Session) -> Element<'_, Message> {
    if let Some(status) = status(session) {
        return text(status).into();
    }

    scrollable(
        Column::with_children(session.bookmarks().iter().map(bookmark_row)).spacing(8),
    )
    .into()
}

/// Text shown in place of the list, if there is nothing to list yet.
fn status(session: &Session) -> Option<&'static str> {
    if session.loading() {
        Some("Loading bookmarks...")
    } else if session.bookmarks().is_empty() {
        Some("No bookmarks yet. Add your first one.")
    } else {
        None
    }
}

fn bookmark_row(bookmark: &Bookmark) -> Element<'_, Message> {
    container(
        row![
            column![
                text(&bookmark.title).size(18),
                text(&bookmark.url).style(text::secondary),
            ],
            space::horizontal(),
            button("Edit").on_press(Message::EditPressed(bookmark.clone())),
            button("Delete")
                .style(button::danger)
                .on_press(Message::DeletePressed(bookmark.id.clone())),
        ]
        .spacing(8)
        .padding(12),
    )
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}
