//! Painting phase state
//!
//! Owns the primary cursor, the paint engine, the auxiliary cursor set and
//! the viewport for the lifetime of the painting phase.

use ratatui::text::Text;

use crate::domain::core::Coordinate;
use crate::domain::engine::PaintEngine;
use crate::domain::grid::Grid;
use crate::domain::navigation::{move_wrap, AuxiliaryCursors};
use crate::export::CanvasSnapshot;
use crate::input::keyboard::PaintCommand;
use crate::ui::renderer::{self, CanvasFrame, FOOTER_HEIGHT};
use crate::ui::theme::Theme;
use crate::ui::viewport::Viewport;

/// What the state machine should do after a painting command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOutcome {
    Continue,
    RequestExport,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintingState {
    grid: Grid,
    cursor: Coordinate,
    engine: PaintEngine,
    auxiliary: AuxiliaryCursors,
    viewport: Viewport,
}

impl PaintingState {
    /// Fresh canvas: empty store, cursor at the origin, Path, paint mode off
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cursor: Coordinate::ORIGIN,
            engine: PaintEngine::new(grid),
            auxiliary: AuxiliaryCursors::new(),
            viewport: Viewport::new(),
        }
    }

    pub fn handle(&mut self, command: PaintCommand) -> PaintOutcome {
        log::debug!("Painting command {command:?} at {}", self.cursor);
        match command {
            PaintCommand::Move(direction) => {
                self.cursor = move_wrap(self.cursor, direction, self.grid.size());
                if self.engine.paint_mode() {
                    self.engine.drag_paint(self.cursor);
                }
            }
            PaintCommand::TogglePaintMode => {
                self.engine.toggle_paint_mode();
            }
            PaintCommand::CyclePaintType => {
                self.engine.cycle_type();
            }
            PaintCommand::MarkCell => self.engine.toggle(self.cursor),
            PaintCommand::SpawnAuxiliary(direction) => {
                if self
                    .auxiliary
                    .spawn(self.cursor, direction, self.grid.size())
                    .is_none()
                {
                    log::debug!("No free cell {direction:?} of {}", self.cursor);
                }
            }
            PaintCommand::ClearAuxiliary => self.auxiliary.clear(),
            PaintCommand::RequestExport => return PaintOutcome::RequestExport,
            PaintCommand::Quit => return PaintOutcome::Quit,
        }
        // Marks and auxiliary cursors change cell widths, not only moves
        self.follow_cursor();
        PaintOutcome::Continue
    }

    /// Scrolls the viewport so the primary cursor's cell is fully visible
    fn follow_cursor(&mut self) {
        if !self.viewport.is_ready() {
            return;
        }
        let (start, span) = self.frame().cursor_span();
        self.viewport.follow(self.cursor.y as u16);
        self.viewport.follow_column(start, span);
    }

    /// Fits the viewport to a terminal of `width` x `height`
    pub fn resize(&mut self, width: u16, height: u16) {
        let grid_height = height
            .saturating_sub(renderer::header_height())
            .saturating_sub(FOOTER_HEIGHT);
        self.viewport.resize(width, grid_height);
        self.follow_cursor();
    }

    pub fn frame(&self) -> CanvasFrame<'_> {
        CanvasFrame {
            grid: self.grid,
            store: self.engine.store(),
            cursor: self.cursor,
            auxiliary: &self.auxiliary,
            paint_mode: self.engine.paint_mode(),
            active: self.engine.active_type(),
        }
    }

    /// Header, the visible slice of grid rows, then the footer
    pub fn view(&self, theme: &Theme) -> Text<'static> {
        if !self.viewport.is_ready() {
            return renderer::initializing();
        }

        let frame = self.frame();
        let first = u32::from(self.viewport.y_offset());
        let last = first
            .saturating_add(u32::from(self.viewport.height()))
            .min(self.grid.size());

        let skip = usize::from(self.viewport.x_offset());
        let width = usize::from(self.viewport.width());

        let mut text = renderer::header();
        text.lines.extend(
            (first..last).map(|y| renderer::clip_line(frame.row(y, theme), skip, width)),
        );
        text.lines.extend(frame.footer(theme).lines);
        text
    }

    pub fn snapshot(&self) -> CanvasSnapshot {
        CanvasSnapshot::from_store(self.engine.store())
    }
}

#[cfg(test)]
impl PaintingState {
    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    pub fn engine(&self) -> &PaintEngine {
        &self.engine
    }

    pub fn auxiliary(&self) -> &AuxiliaryCursors {
        &self.auxiliary
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}
