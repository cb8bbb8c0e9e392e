//! PNG export using tiny-skia
//!
//! Layout calculation is kept apart from rasterization so the geometry can be
//! checked without decoding an image.

use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::{CanvasSnapshot, ExportError};
use crate::ui::theme::Theme;

/// Largest image side in pixels; a 16384px square is 1 GiB of RGBA
pub const MAX_IMAGE_SIDE: u32 = 16_384;

/// A grid line segment in pixel space
#[derive(Debug, Clone)]
pub struct GridLine {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// A filled cell in pixel space
#[derive(Debug, Clone)]
pub struct CellFill {
    pub rect: Rect,
    pub rgb: [u8; 3],
}

/// Pre-calculated geometry for one exported image
#[derive(Debug, Clone)]
pub struct CanvasLayout {
    pub fills: Vec<CellFill>,
    pub lines: Vec<GridLine>,
    pub size: u32,
    pub cell_px: u32,
    /// Image side in pixels
    pub side: u32,
}

impl CanvasLayout {
    pub fn from_snapshot(
        snapshot: &CanvasSnapshot,
        cell_px: u32,
        theme: &Theme,
    ) -> Result<Self, ExportError> {
        let side = snapshot
            .size
            .checked_mul(cell_px)
            .filter(|side| (1..=MAX_IMAGE_SIDE).contains(side))
            .ok_or(ExportError::PixmapCreationFailed {
                size: snapshot.size,
                cell_px,
            })?;
        let cell = cell_px as f32;
        let extent = side as f32;

        let fills = snapshot
            .cells
            .iter()
            .filter_map(|painted| {
                let (x, y) = (painted.x as f32 * cell, painted.y as f32 * cell);
                let rect = Rect::from_xywh(x, y, cell, cell)?;
                Some(CellFill {
                    rect,
                    rgb: theme.export_rgb(painted.marker),
                })
            })
            .collect();

        // Interior lines only; the image edge is the outer border
        let mut lines = Vec::with_capacity(2 * snapshot.size as usize);
        for i in 1..snapshot.size {
            let offset = i as f32 * cell;
            lines.push(GridLine {
                x1: offset,
                y1: 0.0,
                x2: offset,
                y2: extent,
            });
            lines.push(GridLine {
                x1: 0.0,
                y1: offset,
                x2: extent,
                y2: offset,
            });
        }

        Ok(Self {
            fills,
            lines,
            size: snapshot.size,
            cell_px,
            side,
        })
    }

    /// Rasterizes the layout onto a white background
    pub fn render(&self) -> Result<Pixmap, ExportError> {
        let mut pixmap =
            Pixmap::new(self.side, self.side).ok_or(ExportError::PixmapCreationFailed {
                size: self.size,
                cell_px: self.cell_px,
            })?;
        pixmap.fill(Color::WHITE);

        let mut paint = Paint::default();
        for fill in &self.fills {
            let [r, g, b] = fill.rgb;
            paint.set_color_rgba8(r, g, b, 255);
            pixmap.fill_rect(fill.rect, &paint, Transform::identity(), None);
        }

        paint.set_color(Color::from_rgba8(200, 200, 200, 255));
        let stroke = Stroke {
            width: 1.0,
            ..Stroke::default()
        };
        for line in &self.lines {
            let mut builder = PathBuilder::new();
            builder.move_to(line.x1, line.y1);
            builder.line_to(line.x2, line.y2);
            if let Some(path) = builder.finish() {
                pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }

        Ok(pixmap)
    }
}

pub fn encode_png(
    snapshot: &CanvasSnapshot,
    cell_px: u32,
    theme: &Theme,
) -> Result<Vec<u8>, ExportError> {
    let pixmap = CanvasLayout::from_snapshot(snapshot, cell_px, theme)?.render()?;
    pixmap
        .encode_png()
        .map_err(|e| ExportError::PngEncoding(e.to_string()))
}
