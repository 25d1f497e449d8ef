//! Core Elm architecture modules
//!
//! - **State** (`state`): application state, mutated only through updates
//! - **Message** (`msg`): domain events that can change the state
//! - **Update** (`update`): pure state transition function
//! - **Command** (`cmd`): side effects emitted by transitions
//! - **Translator** (`translator`): raw external events → domain messages

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
