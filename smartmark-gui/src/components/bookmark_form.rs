use iced::{
    Element,
    widget::{button, column, row, text, text_input},
};
use smartmark_lib::{Field, MAX_TITLE_LEN, Session};

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    UrlChanged(String),
    SubmitPressed,
    CancelPressed,
}

/// Action used for communicating with the parent component
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Submit,
    Cancel,
}

/// Apply typing directly to the draft and hand the buttons to the parent.
pub fn update(session: &mut Session, message: Message) -> Action {
    match message {
        Message::TitleChanged(content) => {
            session.update_field(Field::Title, clamp_title(content));
            Action::None
        }
        Message::UrlChanged(content) => {
            session.update_field(Field::Url, content);
            Action::None
        }
        Message::SubmitPressed => Action::Submit,
        Message::CancelPressed => Action::Cancel,
    }
}

pub fn view(session: &Session) -> Element<'_, Message> {
    let draft = session.draft();
    let editing = session.mode().is_editing();

    let submit = button(text(if editing {
        "Update Bookmark"
    } else {
        "Add Bookmark"
    }))
    .on_press(Message::SubmitPressed);

    let mut actions = row![submit].spacing(8);
    if editing {
        actions = actions.push(
            button("Cancel")
                .style(button::secondary)
                .on_press(Message::CancelPressed),
        );
    }

    column![
        text_input("Bookmark title", &draft.title)
            .on_input(Message::TitleChanged)
            .on_submit(Message::SubmitPressed),
        text_input("https://example.com", &draft.url)
            .on_input(Message::UrlChanged)
            .on_submit(Message::SubmitPressed),
        actions,
    ]
    .spacing(10)
    .into()
}

/// Cut a title down to [`MAX_TITLE_LEN`] characters.
fn clamp_title(mut title: String) -> String {
    if let Some((end, _)) = title.char_indices().nth(MAX_TITLE_LEN) {
        title.truncate(end);
    }
    title
}
