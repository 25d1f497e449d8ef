//! Forum entities and collection references
//!
//! The two item types mirror what the server returns: threads are keyed by
//! an integer id, posts by a string id. Controllers never interpret ids;
//! they only move whole items around.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Number of items requested per page, for both collections.
pub const PAGE_SIZE: usize = 10;

/// A discussion thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: i64,
    pub title: String,
}

/// A post within a thread. The body field is named `post` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub post: String,
}

/// Reference to a remote collection of items.
///
/// The thread id inside `Posts` is treated as an opaque string supplied by
/// the routing layer; it is only ever substituted into the collection path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collection {
    Threads,
    Posts { thread_id: String },
}

impl Collection {
    /// Path of the collection relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Collection::Threads => "/threads".to_string(),
            Collection::Posts { thread_id } => {
                let encoded = utf8_percent_encode(thread_id, NON_ALPHANUMERIC);
                format!("/threads/{encoded}/posts")
            }
        }
    }

    /// Short name for logs and command tracing.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Threads => "threads",
            Collection::Posts { .. } => "posts",
        }
    }

    pub fn is_threads(&self) -> bool {
        matches!(self, Collection::Threads)
    }
}

/// One bounded batch of items returned by a single page fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Threads(Vec<Thread>),
    Posts(Vec<Post>),
}

impl Page {
    pub fn len(&self) -> usize {
        match self {
            Page::Threads(items) => items.len(),
            Page::Posts(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_threads_path() {
        assert_eq!(Collection::Threads.path(), "/threads");
    }

    #[test]
    fn test_posts_path_encodes_opaque_id() {
        let collection = Collection::Posts {
            thread_id: "42".to_string(),
        };
        assert_eq!(collection.path(), "/threads/42/posts");

        // Ids are opaque strings; anything unusual must survive the path
        let collection = Collection::Posts {
            thread_id: "a/b c".to_string(),
        };
        assert_eq!(collection.path(), "/threads/a%2Fb%20c/posts");
    }

    #[test]
    fn test_page_len() {
        let page = Page::Threads(vec![Thread {
            id: 1,
            title: "hello".to_string(),
        }]);
        assert_eq!(page.len(), 1);
        assert!(!page.is_empty());

        let page = Page::Posts(vec![]);
        assert_eq!(page.len(), 0);
        assert!(page.is_empty());
    }

    #[test]
    fn test_thread_deserialization() -> serde_json::Result<()> {
        let thread: Thread = serde_json::from_str(r#"{"id": 7, "title": "General"}"#)?;
        assert_eq!(thread.id, 7);
        assert_eq!(thread.title, "General");

        Ok(())
    }

    #[test]
    fn test_post_deserialization() -> serde_json::Result<()> {
        let post: Post = serde_json::from_str(r#"{"id": "abc-1", "post": "first!"}"#)?;
        assert_eq!(post.id, "abc-1");
        assert_eq!(post.post, "first!");

        Ok(())
    }
}
