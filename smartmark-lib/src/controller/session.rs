use derive_more::Display;
use getset::{CopyGetters, Getters};
use strum::{AsRefStr, EnumString};
use tracing::{debug, warn};

use crate::{
    client::{Service, ServiceError},
    controller::{Error, Result},
    entities::{Bookmark, BookmarkDraft, BookmarkId},
};

/// Shown when a failed save doesn't explain itself.
const SAVE_FALLBACK: &str = "Save failed";

/// A form field the user can type into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Title,
    Url,
}

/// Unsaved form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub url: String,
}

impl Draft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Url => &self.url,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.url.is_empty()
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Url => self.url = value,
        }
    }

    /// The request body for this draft, or [`None`] if either field is blank.
    fn trimmed(&self) -> Option<BookmarkDraft> {
        let title = self.title.trim();
        let url = self.url.trim();

        if title.is_empty() || url.is_empty() {
            None
        } else {
            Some(BookmarkDraft::new(title, url))
        }
    }
}

impl From<&Bookmark> for Draft {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
        }
    }
}

/// Whether a submit creates a new bookmark or updates an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Display)]
pub enum EditMode {
    #[default]
    #[display("creating")]
    Creating,
    #[display("editing {_0}")]
    Editing(BookmarkId),
}

impl EditMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn target(&self) -> Option<&BookmarkId> {
        match self {
            Self::Creating => None,
            Self::Editing(id) => Some(id),
        }
    }
}

/// A validated save request and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(BookmarkDraft),
    Update(BookmarkId, BookmarkDraft),
}

impl Submission {
    pub async fn send<S: Service>(&self, service: &S) -> std::result::Result<(), ServiceError> {
        match self {
            Self::Create(draft) => service.create(draft).await,
            Self::Update(id, draft) => service.update(id, draft).await,
        }
    }
}

/// Everything a front end renders: the last loaded list, the form, the edit target and the
/// loading/error flags.
///
/// Transitions are synchronous. Network work happens between them, either in
/// [`Controller`](super::Controller) or in a front end's own task system.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct Session {
    #[getset(get = "pub")]
    bookmarks: Vec<Bookmark>,
    #[getset(get = "pub")]
    draft: Draft,
    #[getset(get = "pub")]
    mode: EditMode,
    #[getset(get_copy = "pub")]
    loading: bool,
    #[getset(get = "pub")]
    error: Option<String>,
}

impl Session {
    /// A session about to perform its first load.
    pub fn new() -> Self {
        Self {
            bookmarks: Vec::new(),
            draft: Draft::default(),
            mode: EditMode::Creating,
            loading: true,
            error: None,
        }
    }

    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Apply the outcome of a list request. The list is replaced wholesale on success and left
    /// alone on failure. Loading is cleared either way.
    pub fn finish_refresh(
        &mut self,
        result: std::result::Result<Vec<Bookmark>, ServiceError>,
    ) -> Result<()> {
        self.loading = false;

        match result {
            Ok(bookmarks) => {
                debug!("Loaded {} bookmarks", bookmarks.len());
                self.bookmarks = bookmarks;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                warn!("Listing bookmarks failed: {err}");
                Err(self.fail(Error::Load))
            }
        }
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value.into());
    }

    /// Validate the draft and decide between create and update.
    pub fn prepare_submit(&mut self) -> Result<Submission> {
        let Some(body) = self.draft.trimmed() else {
            return Err(self.fail(Error::Validation));
        };

        Ok(match &self.mode {
            EditMode::Creating => Submission::Create(body),
            EditMode::Editing(id) => Submission::Update(id.clone(), body),
        })
    }

    /// Record a rejected save. The draft and edit target are kept so the user can retry.
    pub fn save_failed(&mut self, err: ServiceError) -> Error {
        warn!("Saving bookmark failed: {err}");
        let message = err.problem().unwrap_or_else(|| SAVE_FALLBACK.to_string());

        self.fail(Error::Save(message))
    }

    /// Finish a save once the list has been reloaded.
    pub fn complete_save(&mut self) {
        self.reset_form();
        self.error = None;
    }

    pub fn start_edit(&mut self, bookmark: &Bookmark) {
        debug!("Editing bookmark {}", bookmark.id);
        self.mode = EditMode::Editing(bookmark.id.clone());
        self.draft = Draft::from(bookmark);
        self.error = None;
    }

    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    pub fn remove_failed(&mut self, err: ServiceError) -> Error {
        warn!("Deleting bookmark failed: {err}");
        self.fail(Error::Delete)
    }

    /// Finish a delete once the list has been reloaded. Deleting the bookmark under edit drops
    /// the edit.
    pub fn complete_remove(&mut self, id: &BookmarkId) {
        if self.mode.target() == Some(id) {
            self.reset_form();
        }
    }

    fn reset_form(&mut self) {
        self.draft = Draft::default();
        self.mode = EditMode::Creating;
    }

    fn fail(&mut self, err: Error) -> Error {
        self.error = Some(err.to_string());
        err
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
