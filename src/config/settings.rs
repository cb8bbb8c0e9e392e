//! Editor settings loaded from an optional TOML file
//!
//! Every field has a default so a partial (or missing) file is fine. Numeric
//! limits are clamped on load instead of rejected.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// ANSI palette indices used by the terminal theme
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub focused: u8,
    pub blurred: u8,
    pub help: u8,
    pub cursor_mode: u8,
    pub cursor: u8,
    pub auxiliary: u8,
    pub path: u8,
    pub obstacle: u8,
    /// RGB fill of Path cells in PNG exports
    pub export_path_rgb: [u8; 3],
    /// RGB fill of Obstacle cells in PNG exports
    pub export_obstacle_rgb: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            focused: 205,
            blurred: 240,
            help: 240,
            cursor_mode: 244,
            cursor: 205,
            auxiliary: 81,
            path: 220,
            obstacle: 160,
            export_path_rgb: [232, 180, 40],
            export_obstacle_rgb: [60, 60, 60],
        }
    }
}

/// User-facing editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Prefill for both resize fields
    pub default_size: Option<u32>,
    /// Largest grid side the resize form accepts
    pub max_grid_size: u32,
    /// Character limit of the resize form fields
    pub field_char_limit: usize,
    /// Directory used when the export path is left empty
    pub export_dir: PathBuf,
    /// Side length of one cell in PNG exports, in pixels
    pub export_cell_px: u32,
    pub theme: ThemeConfig,
}

impl EditorConfig {
    pub const DEFAULT_MAX_GRID: u32 = 256;
    pub const MAX_GRID_LIMIT: u32 = 1024;
    pub const DEFAULT_CHAR_LIMIT: usize = 20;
    pub const MAX_CHAR_LIMIT: usize = 31;
    pub const DEFAULT_CELL_PX: u32 = 16;
    pub const MIN_CELL_PX: u32 = 2;
    pub const MAX_CELL_PX: u32 = 128;
    pub const FILE_NAME: &'static str = "config.toml";

    /// Loads the configuration from `path`, clamping out-of-range values
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `explicit` if given, else `fallback` when it exists, else defaults
    pub fn load_or_default(
        explicit: Option<&Path>,
        fallback: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match fallback {
            Some(path) if path.is_file() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(text)?;
        Ok(config.sanitized())
    }

    /// Clamps every limit into its supported range
    pub fn sanitized(mut self) -> Self {
        self.max_grid_size = self.max_grid_size.clamp(1, Self::MAX_GRID_LIMIT);
        self.field_char_limit = self.field_char_limit.clamp(1, Self::MAX_CHAR_LIMIT);
        self.export_cell_px = self
            .export_cell_px
            .clamp(Self::MIN_CELL_PX, Self::MAX_CELL_PX);
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_size: None,
            max_grid_size: Self::DEFAULT_MAX_GRID,
            field_char_limit: Self::DEFAULT_CHAR_LIMIT,
            export_dir: PathBuf::from("."),
            export_cell_px: Self::DEFAULT_CELL_PX,
            theme: ThemeConfig::default(),
        }
    }
}
