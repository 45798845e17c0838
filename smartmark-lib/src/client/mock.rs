use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    client::{Service, ServiceError},
    entities::{Bookmark, BookmarkDraft, BookmarkId},
};

/// A request as the mock service received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    List,
    Create(BookmarkDraft),
    Update(BookmarkId, BookmarkDraft),
    Delete(BookmarkId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Default)]
struct State {
    bookmarks: Vec<Bookmark>,
    next_id: i64,
    calls: Vec<Call>,
    failures: Vec<(Verb, ServiceError)>,
}

/// In-memory collection that records every request made against it.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockService {
    state: Arc<Mutex<State>>,
}

impl MockService {
    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        let mock = Self::default();
        {
            let mut state = mock.state.lock();
            state.next_id = bookmarks
                .iter()
                .filter_map(|b| match b.id {
                    BookmarkId::Number(n) => Some(n),
                    BookmarkId::Text(_) => None,
                })
                .max()
                .unwrap_or(0);
            state.bookmarks = bookmarks;
        }
        mock
    }

    /// Make the next request using `verb` fail with `err`.
    pub fn fail_next(&self, verb: Verb, err: ServiceError) {
        self.state.lock().failures.push((verb, err));
    }

    /// Make the next request using `verb` fail with a bare status code.
    pub fn fail_status(&self, verb: Verb, status: u16, body: &str) {
        self.fail_next(
            verb,
            ServiceError::Status {
                status,
                body: body.to_string(),
            },
        );
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    fn record(&self, verb: Verb, call: Call) -> Result<(), ServiceError> {
        let mut state = self.state.lock();
        state.calls.push(call);

        match state.failures.iter().position(|(v, _)| *v == verb) {
            Some(index) => Err(state.failures.remove(index).1),
            None => Ok(()),
        }
    }

    fn not_found(id: &BookmarkId) -> ServiceError {
        ServiceError::Status {
            status: 404,
            body: format!(r#"{{"error": "Bookmark {id} not found"}}"#),
        }
    }
}

impl Service for MockService {
    async fn list(&self) -> Result<Vec<Bookmark>, ServiceError> {
        self.record(Verb::Get, Call::List)?;

        Ok(self.state.lock().bookmarks.clone())
    }

    async fn create(&self, draft: &BookmarkDraft) -> Result<(), ServiceError> {
        self.record(Verb::Post, Call::Create(draft.clone()))?;

        let mut state = self.state.lock();
        state.next_id += 1;
        let id = BookmarkId::Number(state.next_id);
        state.bookmarks.push(Bookmark {
            id,
            title: draft.title.clone(),
            url: draft.url.clone(),
        });

        Ok(())
    }

    async fn update(&self, id: &BookmarkId, draft: &BookmarkDraft) -> Result<(), ServiceError> {
        self.record(Verb::Put, Call::Update(id.clone(), draft.clone()))?;

        let mut state = self.state.lock();
        let bookmark = state
            .bookmarks
            .iter_mut()
            .find(|b| b.id == *id)
            .ok_or_else(|| Self::not_found(id))?;
        bookmark.title = draft.title.clone();
        bookmark.url = draft.url.clone();

        Ok(())
    }

    async fn delete(&self, id: &BookmarkId) -> Result<(), ServiceError> {
        self.record(Verb::Delete, Call::Delete(id.clone()))?;

        let mut state = self.state.lock();
        let before = state.bookmarks.len();
        state.bookmarks.retain(|b| b.id != *id);

        if state.bookmarks.len() == before {
            return Err(Self::not_found(id));
        }

        Ok(())
    }
}
