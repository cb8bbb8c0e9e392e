//! Domain logic and core data structures
//!
//! This module contains the pure canvas logic: grid geometry, cell paint,
//! cursor navigation and the paint engine. It is independent of the terminal
//! and of how anything is drawn.

pub mod core;
pub mod engine;
pub mod grid;
pub mod navigation;
pub mod paint;
