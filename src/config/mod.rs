//! Configuration module for tactile-paint
//!
//! Holds the settings shared between the dialogs, the renderer and the
//! exporter. Values come from an optional TOML file and the command line.

pub mod settings;

pub use settings::{ConfigError, EditorConfig, ThemeConfig};
