use serde::{Deserialize, Serialize};

use crate::domain::forum::Collection;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (network communication, logging, etc.)
///
/// Note on duplication: the network commands also appear as infrastructure
/// operations (`ApiCommand`). Cmd captures application intent (what to do),
/// while infrastructure commands capture execution details (how to do it),
/// so infrastructure can be swapped without leaking external types into the
/// domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // API-related commands
    /// Fetch one bounded page of a collection
    FetchPage {
        collection: Collection,
        offset: usize,
        generation: u64,
    },
    /// Create a new item in a collection
    CreateItem {
        collection: Collection,
        payload: String,
    },

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchPage { .. } | Cmd::CreateItem { .. } => true,

            Cmd::Tui(..) | Cmd::LogError { .. } | Cmd::LogInfo { .. } | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // UI-related has highest priority
            Cmd::Tui(..) => 0,

            // User-initiated writes have high priority
            Cmd::CreateItem { .. } => 1,

            // Page fetches have medium priority
            Cmd::FetchPage { .. } => 2,

            // Logging has lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,

            // Batch takes highest priority of contained commands
            Cmd::Batch(cmds) => cmds.iter().map(|cmd| cmd.priority()).min().unwrap_or(255),

            Cmd::None => 255,
        }
    }
}
