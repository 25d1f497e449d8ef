//! Infrastructure layer
//!
//! Everything that talks to the outside world lives here:
//! - HTTP access to the forum server
//! - Terminal handling
//! - Configuration loading
//! - Command line interface

pub mod api;
pub mod api_service;
pub mod cli;
pub mod config;
pub mod tui;
