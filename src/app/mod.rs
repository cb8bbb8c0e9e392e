//! Application orchestration layer
//!
//! Coordinates input, domain, UI and the terminal surface through the window
//! state machine.

pub mod controller;
pub mod painting;
pub mod state;
