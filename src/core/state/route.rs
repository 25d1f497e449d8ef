use serde::{Deserialize, Serialize};

use crate::domain::forum::Collection;

/// Which view is on screen
///
/// The thread id is an opaque string supplied when a thread is opened; the
/// core never interprets it beyond substituting it into collection paths.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Threads,
    Posts {
        thread_id: String,
    },
}

impl Route {
    /// The collection backing the current view
    pub fn collection(&self) -> Collection {
        match self {
            Route::Threads => Collection::Threads,
            Route::Posts { thread_id } => Collection::Posts {
                thread_id: thread_id.clone(),
            },
        }
    }

    pub fn is_threads(&self) -> bool {
        matches!(self, Route::Threads)
    }
}
