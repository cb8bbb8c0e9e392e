//! Canvas export
//!
//! The export phase hands an immutable snapshot of the canvas to one of the
//! serialization targets below and writes the result to disk.

pub mod png;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::domain::paint::{Marker, PaintStore};
use crate::ui::theme::Theme;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create pixmap for a {size}x{size} canvas at {cell_px}px per cell")]
    PixmapCreationFailed { size: u32, cell_px: u32 },
    #[error("PNG encoding failed: {0}")]
    PngEncoding(String),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Serialization target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    Png,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Text, ExportFormat::Json, ExportFormat::Png];

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Text => "Text",
            ExportFormat::Json => "JSON",
            ExportFormat::Png => "PNG",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Png => "png",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ExportFormat::Text => ExportFormat::Json,
            ExportFormat::Json => ExportFormat::Png,
            ExportFormat::Png => ExportFormat::Text,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            ExportFormat::Text => ExportFormat::Png,
            ExportFormat::Json => ExportFormat::Text,
            ExportFormat::Png => ExportFormat::Json,
        }
    }
}

/// Confirmed export parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub path: PathBuf,
    pub format: ExportFormat,
    /// Pixels per cell side, PNG only
    pub cell_px: u32,
}

/// One painted cell in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotCell {
    pub x: u32,
    pub y: u32,
    pub marker: Marker,
}

/// Immutable copy of the canvas taken when export is requested
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CanvasSnapshot {
    pub size: u32,
    /// Marked cells in row-major order
    pub cells: Vec<SnapshotCell>,
}

impl CanvasSnapshot {
    pub fn from_store(store: &PaintStore) -> Self {
        Self {
            size: store.grid().size(),
            cells: store
                .iter()
                .map(|(coord, marker)| SnapshotCell {
                    x: coord.x,
                    y: coord.y,
                    marker,
                })
                .collect(),
        }
    }
}

/// Everything the exporting phase needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub snapshot: CanvasSnapshot,
    pub settings: ExportSettings,
}

impl ExportJob {
    /// Serializes the snapshot in the configured format
    pub fn encode(&self, theme: &Theme) -> Result<Vec<u8>, ExportError> {
        match self.settings.format {
            ExportFormat::Text => Ok(encode_text(&self.snapshot).into_bytes()),
            ExportFormat::Json => Ok(serde_json::to_vec_pretty(&self.snapshot)?),
            ExportFormat::Png => png::encode_png(&self.snapshot, self.settings.cell_px, theme),
        }
    }

    /// Encodes and writes the export, creating missing parent directories
    pub fn write(&self, theme: &Theme) -> Result<PathBuf, ExportError> {
        let bytes = self.encode(theme)?;
        let path = &self.settings.path;
        let write_error = |source| ExportError::Write {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(path, bytes).map_err(write_error)?;

        log::info!(
            "Exported {}x{} canvas ({} marked cells) as {} to {}",
            self.snapshot.size,
            self.snapshot.size,
            self.snapshot.cells.len(),
            self.settings.format.name(),
            path.display()
        );
        Ok(path.clone())
    }
}

/// Text export: one line per row, `.` unmarked, marker glyph otherwise
pub fn encode_text(snapshot: &CanvasSnapshot) -> String {
    let size = snapshot.size as usize;
    let mut rows = vec![vec!['.'; size]; size];
    for cell in &snapshot.cells {
        if let Some(slot) = rows
            .get_mut(cell.y as usize)
            .and_then(|row| row.get_mut(cell.x as usize))
        {
            *slot = cell.marker.glyph();
        }
    }

    let mut out = String::with_capacity(size * (size + 1));
    for row in rows {
        let line: String = row.into_iter().collect();
        let _ = writeln!(out, "{line}");
    }
    out
}

/// Resolves the path the user typed into the file that will be written
///
/// An empty path becomes `<export_dir>/canvas.<ext>`; a path without an
/// extension gets the format's extension.
pub fn resolve_path(typed: &str, export_dir: &Path, format: ExportFormat) -> PathBuf {
    let typed = typed.trim();
    if typed.is_empty() {
        return export_dir.join(format!("canvas.{}", format.extension()));
    }

    let path = PathBuf::from(typed);
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(format.extension())
    }
}
