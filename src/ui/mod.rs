//! User interface layer
//!
//! Dialogs, form widgets, the canvas renderer and the theme. Everything here
//! turns state into styled text; nothing draws to the terminal directly.

pub mod export_dialog;
pub mod form;
pub mod renderer;
pub mod resize_dialog;
pub mod theme;
pub mod viewport;
