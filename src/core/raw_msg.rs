use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::forum::{Collection, Page};

/// Raw external events entering the application
///
/// These are produced by the TUI event loop and the API service and carry no
/// domain meaning yet; the translator turns them into `Msg` values based on
/// the current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // Terminal events
    Key(KeyEvent),
    Paste(String),
    Tick,
    Render,
    Resize(u16, u16),

    // Host control
    Quit,
    Suspend,
    Resume,

    // Network results
    Api(ApiEvent),

    // Out-of-band notifications
    SystemMessage(String),
    Error(String),
}

/// Completed API operations reported by the background service
///
/// Page results carry the generation the request was issued under so the
/// owning list can drop results that arrive after a reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiEvent {
    PageLoaded {
        collection: Collection,
        generation: u64,
        page: Page,
    },
    PageFailed {
        collection: Collection,
        generation: u64,
        message: String,
    },
    ItemCreated {
        collection: Collection,
    },
    ItemRejected {
        collection: Collection,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_msg_serialization() -> serde_json::Result<()> {
        let msg = RawMsg::Api(ApiEvent::PageLoaded {
            collection: Collection::Threads,
            generation: 3,
            page: Page::Threads(vec![]),
        });
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: RawMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }

    #[test]
    fn test_api_event_equality() {
        let a = ApiEvent::ItemCreated {
            collection: Collection::Threads,
        };
        let b = ApiEvent::ItemCreated {
            collection: Collection::Threads,
        };
        assert_eq!(a, b);
    }
}
