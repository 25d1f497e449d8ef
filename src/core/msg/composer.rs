use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::forum::Collection;

/// Messages for the submission form state machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComposerMsg {
    /// Open the form targeting a collection (thread titles or a thread's posts)
    Open(Collection),
    Cancel,
    Submit,
    SubmitSucceeded,
    SubmitFailed { message: String },

    // Keep for compatibility with the stateless TextArea path
    ProcessInput(KeyEvent),
}

impl ComposerMsg {
    pub fn is_frequent(&self) -> bool {
        false
    }
}
