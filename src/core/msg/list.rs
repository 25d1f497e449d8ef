use serde::{Deserialize, Serialize};

/// Messages for a paginated list state machine
///
/// Generic over the item type so the thread list and the post list share one
/// set of transitions. Fetch results carry the generation they were
/// requested under; results from an older generation are discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListMsg<T> {
    // Fetch lifecycle
    LoadInitial,
    LoadMore,
    ResetAndReload,
    PageLoaded { generation: u64, items: Vec<T> },
    LoadFailed { generation: u64, message: String },

    // Selection operations
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    Select(usize),
    Unselect,
}

impl<T> ListMsg<T> {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        false
    }
}
