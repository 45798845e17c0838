use iced::{
    Element,
    Length::Fill,
    Task, Theme, application,
    widget::{column, container, text},
};
use smartmark_lib::{
    Bookmark, BookmarkId, CoreConfig, HttpService, Service, ServiceError, Session,
};
use tracing::{Level, debug, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{bookmark_form, bookmark_list},
    config::GuiConfig,
};

pub mod components;
pub mod config;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    BookmarkForm(bookmark_form::Message),
    BookmarkList(bookmark_list::Message),
    Refreshed {
        result: Result<Vec<Bookmark>, ServiceError>,
        then: Followup,
    },
    Saved(Result<(), ServiceError>),
    Removed(BookmarkId, Result<(), ServiceError>),
}

/// Work that may only happen once the list has been reloaded.
#[derive(Debug, Clone, PartialEq)]
enum Followup {
    Nothing,
    FinishSave,
    FinishRemove(BookmarkId),
}

struct App {
    title: String,
    theme: Theme,
    service: HttpService,
    session: Session,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Failed to install logger: {err}");
        }

        let cfg = CoreConfig::load_or_default();
        let gui_cfg = GuiConfig::load().unwrap_or_else(|err| {
            warn!("Using default GUI configuration: {err}");
            GuiConfig::default()
        });

        let mut app = Self::with_service(HttpService::new(cfg.endpoint()), gui_cfg.theme());
        let task = app.refresh(Followup::Nothing);

        (app, task)
    }

    fn with_service(service: HttpService, theme: Theme) -> Self {
        debug!("Using bookmark endpoint {}", service.endpoint());

        Self {
            title: "Smart Bookmark Manager".into(),
            theme,
            service,
            session: Session::new(),
        }
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BookmarkForm(message) => {
                match bookmark_form::update(&mut self.session, message) {
                    bookmark_form::Action::None => Task::none(),
                    bookmark_form::Action::Cancel => {
                        self.session.cancel_edit();
                        Task::none()
                    }
                    bookmark_form::Action::Submit => self.submit(),
                }
            }
            Message::BookmarkList(message) => match message {
                bookmark_list::Message::EditPressed(bookmark) => {
                    self.session.start_edit(&bookmark);
                    Task::none()
                }
                bookmark_list::Message::DeletePressed(id) => self.remove(id),
            },
            Message::Refreshed { result, then } => {
                // A failed reload has already been recorded as the session's error
                if let Err(err) = self.session.finish_refresh(result) {
                    debug!("Reload failed: {err}");
                }

                match then {
                    Followup::Nothing => {}
                    Followup::FinishSave => self.session.complete_save(),
                    Followup::FinishRemove(id) => self.session.complete_remove(&id),
                }

                Task::none()
            }
            Message::Saved(Ok(())) => self.refresh(Followup::FinishSave),
            Message::Saved(Err(err)) => {
                self.session.save_failed(err);
                Task::none()
            }
            Message::Removed(id, Ok(())) => self.refresh(Followup::FinishRemove(id)),
            Message::Removed(_, Err(err)) => {
                self.session.remove_failed(err);
                Task::none()
            }
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let mut content = column![
            text(&self.title).size(28),
            bookmark_form::view(&self.session).map(Message::BookmarkForm),
        ]
        .spacing(16)
        .max_width(720);

        if let Some(error) = self.session.error() {
            content = content.push(text(error).style(text::danger));
        }

        content = content.push(bookmark_list::view(&self.session).map(Message::BookmarkList));

        container(content)
            .padding(24)
            .center_x(Fill)
            .height(Fill)
            .into()
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn refresh(&mut self, then: Followup) -> Task<Message> {
        self.session.begin_refresh();

        let service = self.service.clone();
        Task::perform(async move { service.list().await }, move |result| {
            Message::Refreshed { result, then }
        })
    }

    fn submit(&mut self) -> Task<Message> {
        // Validation failures land in the session's error
        let Ok(submission) = self.session.prepare_submit() else {
            return Task::none();
        };

        let service = self.service.clone();
        Task::perform(
            async move { submission.send(&service).await },
            Message::Saved,
        )
    }

    fn remove(&self, id: BookmarkId) -> Task<Message> {
        let service = self.service.clone();
        Task::perform(
            async move {
                let result = service.delete(&id).await;
                (id, result)
            },
            |(id, result)| Message::Removed(id, result),
        )
    }
}
