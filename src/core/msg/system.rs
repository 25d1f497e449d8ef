use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    // System control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // Status management
    UpdateStatusMessage(String),
    ClearStatusMessage,
    /// Age the current status message by one tick; old messages expire
    TickStatusMessage,
    ShowError(String),
}

impl SystemMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::TickStatusMessage)
    }
}
