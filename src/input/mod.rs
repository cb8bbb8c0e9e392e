//! Input handling
//!
//! Maps terminal key events to the commands of each window phase.

pub mod keyboard;
