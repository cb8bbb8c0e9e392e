//! Paint types and the cell store
//!
//! `PaintType` is what the user selects; `Marker` is what a cell can hold.
//! The eraser is an instruction, never a cell state: every write resolves it
//! to "remove the entry" before touching the store, so the store cannot hold
//! an eraser at all.

use serde::Serialize;

use crate::domain::core::Coordinate;
use crate::domain::grid::Grid;

/// Paint applied by the next toggle or drag-paint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintType {
    #[default]
    Path,
    Obstacle,
    Eraser,
}

impl PaintType {
    /// Advances to the next paint type, wrapping from Eraser back to Path
    pub fn next(self) -> Self {
        match self {
            PaintType::Path => PaintType::Obstacle,
            PaintType::Obstacle => PaintType::Eraser,
            PaintType::Eraser => PaintType::Path,
        }
    }

    /// Human readable name shown in the footer
    pub fn name(self) -> &'static str {
        match self {
            PaintType::Path => "Path",
            PaintType::Obstacle => "Obstacle",
            PaintType::Eraser => "Eraser",
        }
    }

    /// Resolves the paint into the marker it leaves behind
    ///
    /// `None` means the cell ends up unmarked.
    pub fn resolve(self) -> Option<Marker> {
        match self {
            PaintType::Path => Some(Marker::Path),
            PaintType::Obstacle => Some(Marker::Obstacle),
            PaintType::Eraser => None,
        }
    }
}

/// Persistent marker stored in a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Path,
    Obstacle,
}

impl Marker {
    /// Single character used in the grid view and text export
    pub fn glyph(self) -> char {
        match self {
            Marker::Path => 'X',
            Marker::Obstacle => '#',
        }
    }
}

impl From<Marker> for PaintType {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::Path => PaintType::Path,
            Marker::Obstacle => PaintType::Obstacle,
        }
    }
}

/// Flat arena of cell markers, indexed `y * N + x`
///
/// Absence of a marker means the cell is unmarked. Coordinates outside the
/// owning grid are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintStore {
    grid: Grid,
    cells: Vec<Option<Marker>>,
}

impl PaintStore {
    /// Creates an empty store covering every cell of `grid`
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cells: vec![None; grid.cell_count()],
        }
    }

    /// Returns the grid this store covers
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Marker at `coord`, or `None` if unmarked or out of range
    pub fn get(&self, coord: Coordinate) -> Option<Marker> {
        self.grid
            .index_of(coord)
            .and_then(|index| self.cells[index])
    }

    /// Checks if the cell holds a marker
    #[cfg(test)]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.get(coord).is_some()
    }

    /// Resolved marker at `coord` as it should be displayed or exported
    ///
    /// Eraser paint never reaches the arena, so the stored value is already
    /// the resolved one.
    pub fn resolve_eraser(&self, coord: Coordinate) -> Option<Marker> {
        self.get(coord)
    }

    /// Writes `paint` into the cell, resolving an eraser to removal
    pub fn apply(&mut self, coord: Coordinate, paint: PaintType) {
        if let Some(index) = self.grid.index_of(coord) {
            self.cells[index] = paint.resolve();
        }
    }

    /// Removes the cell's marker, returning what was there
    pub fn remove(&mut self, coord: Coordinate) -> Option<Marker> {
        self.grid
            .index_of(coord)
            .and_then(|index| self.cells[index].take())
    }

    /// Number of marked cells
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Iterates marked cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Marker)> + '_ {
        self.cells.iter().enumerate().filter_map(|(index, cell)| {
            let marker = (*cell)?;
            self.grid.coord_at(index).map(|coord| (coord, marker))
        })
    }
}
