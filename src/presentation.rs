//! Presentation layer
//!
//! Stateless views over `AppState`. Components compose widgets into whole
//! screens; widgets render individual items. Nothing here mutates state
//! except the composer's pending-key processing, which the update function
//! drives explicitly.

pub mod components;
pub mod config;
pub mod widgets;
