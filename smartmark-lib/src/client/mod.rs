//! Access to the remote bookmark collection.
//!
//! The [`Service`] trait is the only way the controller talks to the outside
//! world. [`HttpService`] is the real implementation; tests substitute an
//! in-memory one.

use std::{future::Future, sync::Arc};

use thiserror::Error;

use crate::entities::{Bookmark, BookmarkDraft, BookmarkId};

mod http;
#[cfg(test)]
pub(crate) mod mock;
mod problem;

pub use http::HttpService;
pub use problem::problem_message;

/// Errors from the collection service layer.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(Arc<reqwest::Error>),
    /// The service answered with a non-2xx status code.
    #[error("Bookmark service error ({status}): {body}")]
    Status { status: u16, body: String },
    /// The service answered 2xx but the body was not what was asked for.
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ServiceError {
    /// The message a non-2xx response carries in its body, if any.
    pub fn problem(&self) -> Option<String> {
        match self {
            Self::Status { body, .. } => problem_message(body),
            Self::Request(_) | Self::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Request(Arc::new(err))
        }
    }
}

/// A remote collection of bookmarks supporting list, create, update and delete.
pub trait Service {
    /// Fetch every bookmark in the collection.
    fn list(&self) -> impl Future<Output = Result<Vec<Bookmark>, ServiceError>> + Send;

    /// Add a new bookmark. The service assigns its id.
    fn create(
        &self,
        draft: &BookmarkDraft,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Replace the title and URL of an existing bookmark.
    fn update(
        &self,
        id: &BookmarkId,
        draft: &BookmarkDraft,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Delete a bookmark.
    fn delete(&self, id: &BookmarkId) -> impl Future<Output = Result<(), ServiceError>> + Send;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_problem_only_from_status() {
        let err = ServiceError::Status {
            status: 422,
            body: r#"{"error": "Title is taken"}"#.into(),
        };
        assert_eq!(err.problem().as_deref(), Some("Title is taken"));

        let err = ServiceError::Decode("expected a sequence".into());
        assert_eq!(err.problem(), None);
    }
}
