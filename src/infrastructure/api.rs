//! HTTP access to the forum server
//!
//! `ApiClient` performs exactly one request per call: a bounded page read or
//! a single-item write. It holds no state besides the connection pool, so
//! all pagination bookkeeping stays in the core.

use serde::Deserialize;
use serde_json::json;

use crate::domain::forum::{Collection, Page, Post, Thread};

/// Failure of a single API call
///
/// The variants mirror what the user ends up seeing: a status line with the
/// code, a generic parse complaint, or the transport's own message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Server answered with a non-2xx status
    #[error("Error: {0}")]
    Status(u16),
    /// Body was not the shape the collection promises
    #[error("Unexpected response format")]
    Parse,
    /// Request never produced a response
    #[error("Network error: {0}")]
    Transport(String),
}

/// Operations the API service executes on behalf of the core
///
/// Mirrors the network commands in `Cmd` but carries execution detail and
/// stays free of application intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    FetchPage {
        collection: Collection,
        offset: usize,
        generation: u64,
    },
    CreateItem {
        collection: Collection,
        payload: String,
    },
}

impl ApiCommand {
    pub fn fetch_page(collection: Collection, offset: usize, generation: u64) -> Self {
        Self::FetchPage {
            collection,
            offset,
            generation,
        }
    }

    pub fn create_item(collection: Collection, payload: String) -> Self {
        Self::CreateItem {
            collection,
            payload,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchPage { .. } => "FetchPage",
            Self::CreateItem { .. } => "CreateItem",
        }
    }
}

/// Wire shape of a post-collection page
#[derive(Debug, Deserialize)]
struct PostsBody {
    posts: Vec<Post>,
}

/// Stateless HTTP client for the forum API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client against a base URL like `http://localhost:8000`
    ///
    /// No request timeout is configured: a hung page fetch deliberately
    /// keeps its list in the loading state until the user refreshes.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Fetch one page of a collection at the given offset
    ///
    /// Thread pages are a bare JSON array; post pages are wrapped in an
    /// object with a `posts` field. One attempt, no retries.
    pub async fn fetch_page(
        &self,
        collection: &Collection,
        offset: usize,
    ) -> Result<Page, ApiError> {
        let url = format!("{}{}?offset={offset}", self.base_url, collection.path());
        log::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        match collection {
            Collection::Threads => {
                let items: Vec<Thread> = response.json().await.map_err(|_| ApiError::Parse)?;
                Ok(Page::Threads(items))
            }
            Collection::Posts { .. } => {
                let body: PostsBody = response.json().await.map_err(|_| ApiError::Parse)?;
                Ok(Page::Posts(body.posts))
            }
        }
    }

    /// Create an item in a collection; the response body is ignored
    pub async fn create_item(
        &self,
        collection: &Collection,
        payload: &str,
    ) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, collection.path());
        log::debug!("POST {url}");

        let body = match collection {
            Collection::Threads => json!({ "title": payload }),
            Collection::Posts { .. } => json!({ "post": payload }),
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages() {
        assert_eq!(ApiError::Status(500).to_string(), "Error: 500");
        assert_eq!(ApiError::Parse.to_string(), "Unexpected response format");
        assert_eq!(
            ApiError::Transport("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ApiClient::new("http://example.com/");
        assert_eq!(client.base_url, "http://example.com");
    }

    #[test]
    fn test_api_command_helpers() {
        let cmd = ApiCommand::fetch_page(Collection::Threads, 10, 2);
        assert_eq!(cmd.name(), "FetchPage");

        let cmd = ApiCommand::create_item(Collection::Threads, "hi".to_string());
        assert_eq!(cmd.name(), "CreateItem");
    }

    // HTTP behavior (status mapping, body parsing) is covered by the
    // wiremock tests in tests/api_client.rs
}
