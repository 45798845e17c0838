//! Bookmark records as the collection service reports them, and the body the
//! client sends when creating or updating one.

mod bookmark;
mod bookmark_id;

pub use bookmark::{Bookmark, BookmarkDraft};
pub use bookmark_id::BookmarkId;

/// Longest title a front end lets the user type.
pub const MAX_TITLE_LEN: usize = 100;
