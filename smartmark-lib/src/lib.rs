//! Core of the Smart Bookmark Manager.
//!
//! Holds the bookmark types, the client for the remote bookmark collection,
//! and the [`Controller`] that keeps a local view of that collection in sync
//! with the service. Front ends drive the controller and render its
//! [`Session`].

use thiserror::Error;

pub mod client;
pub mod config;
pub mod controller;
pub mod entities;
pub mod fs;

pub use client::{HttpService, Service, ServiceError};
pub use config::CoreConfig;
pub use controller::{Controller, Draft, EditMode, Field, Session};
pub use entities::{Bookmark, BookmarkDraft, BookmarkId, MAX_TITLE_LEN};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::Error),
    #[error(transparent)]
    Controller(#[from] controller::Error),
}
