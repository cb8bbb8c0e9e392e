//! Platform integration
//!
//! Owns the terminal the editor draws on.

pub mod terminal;
