//! Integration layer
//!
//! Glue between the pure core and the infrastructure: the runtime owns the
//! state and the message/command queues; the app runner is the composition
//! root and main loop.

pub mod app_runner;
pub mod runtime;

pub use app_runner::AppRunner;
pub use runtime::Runtime;
