//! # bbstui - BBS Forum TUI Client
//!
//! A terminal client for simple BBS-style forums: browse threads, read a
//! thread's posts, create new threads and posts. Built with an Elm-like
//! architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (network, logging)
//! - **View** (`presentation`): UI rendering based on current state
//!
//! The interesting machinery is the generic paginated-list controller
//! (`core::state::list::PagedList`) and the submission state machine
//! (`core::state::composer::ComposerState`); both list views and both
//! create forms are the same two state machines parameterized differently.
//!
//! ## Example Usage
//!
//! ```rust
//! use bbstui::core::{msg::{Msg, list::ListMsg}, state::AppState, update::update};
//!
//! // Initialize state
//! let initial_state = AppState::default();
//!
//! // Process messages
//! let (new_state, commands) = update(Msg::Threads(ListMsg::LoadInitial), initial_state);
//!
//! // State is now updated and commands contain side effects to execute
//! assert!(new_state.threads.is_loading());
//! assert_eq!(commands.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, pure update logic
//! - [`domain`] - Forum entities and text utilities
//! - [`infrastructure`] - HTTP, terminal, configuration
//! - [`integration`] - Runtime and main loop
//! - [`presentation`] - Components and widgets

#![allow(dead_code)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::AppState;
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update;
pub use crate::integration::{AppRunner, Runtime};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
