use serde::{Deserialize, Serialize};

/// Navigation messages for switching between views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    /// Open the posts of the currently selected thread
    OpenThread,
    /// Return from a thread's posts to the thread list
    LeaveThread,
    /// Open the composer for the collection behind the current view
    NewItem,
    /// Discard the current list and reload page 0
    Refresh,
}

impl UiMsg {
    pub fn is_frequent(&self) -> bool {
        false
    }
}
