use serde::{Deserialize, Serialize};

pub mod composer;
pub mod list;
pub mod system;
pub mod ui;

use crate::domain::forum::{Post, Thread};
use composer::ComposerMsg;
use list::ListMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
///
/// These are processed by the update function and represent pure domain
/// events. The two list variants are the same state machine instantiated
/// over different item types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // Thread list operations (delegated to PagedList<Thread>)
    Threads(ListMsg<Thread>),

    // Post list operations (delegated to PagedList<Post>)
    Posts(ListMsg<Post>),

    // Submission form operations (delegated to ComposerState)
    Composer(ComposerMsg),

    // Navigation between views
    Ui(UiMsg),

    // System operations (delegated to SystemState)
    System(SystemMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    /// Domain messages are generally not frequent (raw messages handle Tick/Render)
    pub fn is_frequent(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Threads(ListMsg::LoadMore).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_ne!(
            Msg::Threads(ListMsg::LoadInitial),
            Msg::Threads(ListMsg::LoadMore)
        );
    }

    #[test]
    fn test_msg_serialization() -> serde_json::Result<()> {
        let msg = Msg::Posts(ListMsg::LoadMore);
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
