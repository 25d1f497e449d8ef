use crate::{
    domain::forum::{Post, Thread},
    infrastructure::config::Config,
};

pub mod composer;
pub mod list;
pub mod route;
pub mod system;

use composer::ComposerState;
use list::PagedList;
use route::Route;
use system::SystemState;

/// Unified application state
///
/// Both list views are the same `PagedList` state machine instantiated over
/// different item types; `posts` always belongs to the thread named by the
/// current route and is reset whenever a different thread is opened.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub route: Route,
    pub threads: PagedList<Thread>,
    pub posts: PagedList<Post>,
    pub composer: ComposerState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the specified config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Get the selected thread in the thread list
    pub fn selected_thread(&self) -> Option<&Thread> {
        self.threads.selected()
    }

    /// Whether key input currently belongs to the composer
    pub fn is_composing(&self) -> bool {
        self.composer.is_composing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert!(state.route.is_threads());
        assert_eq!(state.threads.len(), 0);
        assert_eq!(state.posts.len(), 0);
        assert!(!state.is_composing());
        assert!(!state.system.should_quit);
    }

    #[test]
    fn test_selected_thread() {
        let state = AppState::default();

        // Nothing selected on an empty list
        assert!(state.selected_thread().is_none());
    }
}
