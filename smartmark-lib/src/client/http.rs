use reqwest::{Client, Response};
use tracing::debug;

use crate::{
    client::{Service, ServiceError},
    entities::{Bookmark, BookmarkDraft, BookmarkId},
};

/// HTTP client for a bookmark collection endpoint such as `http://host/api/bookmarks`.
#[derive(Debug, Clone)]
pub struct HttpService {
    client: Client,
    endpoint: String,
}

impl HttpService {
    /// Create a client for the collection living at `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn member(&self, id: &BookmarkId) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    /// Return the response unchanged on a success status, or a [`ServiceError::Status`]
    /// holding the status and body text otherwise.
    async fn ensure_success(response: Response) -> Result<Response, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            let url = response.url().clone();
            let body = response.text().await.unwrap_or_default();
            debug!("{url} answered {status}: {body}");
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

impl Service for HttpService {
    async fn list(&self) -> Result<Vec<Bookmark>, ServiceError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let response = Self::ensure_success(response).await?;

        Ok(response.json::<Vec<Bookmark>>().await?)
    }

    async fn create(&self, draft: &BookmarkDraft) -> Result<(), ServiceError> {
        let response = self.client.post(&self.endpoint).json(draft).send().await?;
        Self::ensure_success(response).await?;

        Ok(())
    }

    async fn update(&self, id: &BookmarkId, draft: &BookmarkDraft) -> Result<(), ServiceError> {
        let response = self.client.put(self.member(id)).json(draft).send().await?;
        Self::ensure_success(response).await?;

        Ok(())
    }

    async fn delete(&self, id: &BookmarkId) -> Result<(), ServiceError> {
        let response = self.client.delete(self.member(id)).send().await?;
        Self::ensure_success(response).await?;

        Ok(())
    }
}
