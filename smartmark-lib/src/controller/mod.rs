//! Keeps a local copy of the bookmark collection, the form, and the edit target in step with
//! the collection service.
//!
//! Every write is followed by a full reload of the list; the list is never patched locally.
//! Operations are not serialized against each other: two overlapping calls (a double-clicked
//! delete, an edit racing a reload) each run to completion and the last reload to finish wins.

use thiserror::Error;
use tracing::debug;

use crate::{
    client::Service,
    entities::{Bookmark, BookmarkId},
};

mod session;

pub use session::{Draft, EditMode, Field, Session, Submission};

pub type Result<T> = std::result::Result<T, Error>;

/// A failed operation. The [`Display`](std::fmt::Display) text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Failed to load bookmarks")]
    Load,
    #[error("Title and URL are required")]
    Validation,
    #[error("{0}")]
    Save(String),
    #[error("Delete failed")]
    Delete,
}

/// Drives a [`Session`] against a [`Service`], one awaited request at a time.
#[derive(Debug)]
pub struct Controller<S> {
    service: S,
    session: Session,
}

impl<S: Service> Controller<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Replace the local list with whatever the service currently holds.
    pub async fn refresh(&mut self) -> Result<()> {
        self.session.begin_refresh();
        let result = self.service.list().await;
        self.session.finish_refresh(result)
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.session.update_field(field, value);
    }

    /// Save the draft, creating or updating depending on the edit mode.
    ///
    /// On success the list is reloaded before the form is reset. A reload failure at that
    /// point doesn't undo the save and is not reported.
    pub async fn submit(&mut self) -> Result<()> {
        let submission = self.session.prepare_submit()?;

        if let Err(err) = submission.send(&self.service).await {
            return Err(self.session.save_failed(err));
        }

        if let Err(err) = self.refresh().await {
            debug!("Bookmark saved but the list could not be reloaded: {err}");
        }
        self.session.complete_save();

        Ok(())
    }

    pub fn start_edit(&mut self, bookmark: &Bookmark) {
        self.session.start_edit(bookmark);
    }

    pub fn cancel_edit(&mut self) {
        self.session.cancel_edit();
    }

    /// Delete a bookmark and reload the list. Returns the reload's outcome once the delete
    /// itself went through.
    pub async fn remove(&mut self, id: &BookmarkId) -> Result<()> {
        if let Err(err) = self.service.delete(id).await {
            return Err(self.session.remove_failed(err));
        }

        let refreshed = self.refresh().await;
        self.session.complete_remove(id);

        refreshed
    }
}
