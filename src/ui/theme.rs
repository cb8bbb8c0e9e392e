//! Immutable visual theme
//!
//! Built once from configuration and handed to every view function.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeConfig;
use crate::domain::paint::Marker;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub focused: Style,
    pub blurred: Style,
    pub help: Style,
    pub cursor_mode: Style,
    pub cursor: Style,
    pub auxiliary: Style,
    pub path: Style,
    pub obstacle: Style,
    pub export_path: [u8; 3],
    pub export_obstacle: [u8; 3],
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let fg = |index: u8| Style::default().fg(Color::Indexed(index));
        Self {
            focused: fg(config.focused),
            blurred: fg(config.blurred),
            help: fg(config.help),
            cursor_mode: fg(config.cursor_mode),
            cursor: fg(config.cursor).add_modifier(Modifier::BOLD),
            auxiliary: fg(config.auxiliary).add_modifier(Modifier::BOLD),
            path: fg(config.path),
            obstacle: fg(config.obstacle),
            export_path: config.export_path_rgb,
            export_obstacle: config.export_obstacle_rgb,
        }
    }

    /// Style of a painted cell's fill glyph
    pub fn marker(&self, marker: Marker) -> Style {
        match marker {
            Marker::Path => self.path,
            Marker::Obstacle => self.obstacle,
        }
    }

    /// RGB fill used when rasterizing a marker
    pub fn export_rgb(&self, marker: Marker) -> [u8; 3] {
        match marker {
            Marker::Path => self.export_path,
            Marker::Obstacle => self.export_obstacle,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
