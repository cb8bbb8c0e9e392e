//! Grid geometry
//!
//! The grid is the square, fixed-size coordinate space the canvas lives in.
//! It owns no painted state, only its size and the enumeration of valid cells.

use crate::domain::core::Coordinate;

/// Errors that can occur when constructing a grid
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A grid needs at least one cell
    #[error("grid size must be at least 1")]
    Empty,
    /// Requested size exceeds the configured maximum
    #[error("grid size {size} exceeds the maximum of {max}")]
    TooLarge { size: u32, max: u32 },
}

/// Square N×N grid of addressable cells
///
/// Immutable once constructed. Valid coordinates are `{0..N-1} × {0..N-1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: u32,
}

impl Grid {
    /// Creates a new grid
    ///
    /// # Arguments
    /// * `size` - Side length N (must be > 0 and ≤ `max_size`)
    /// * `max_size` - Upper bound from configuration
    pub fn new(size: u32, max_size: u32) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::Empty);
        }
        if size > max_size {
            return Err(GridError::TooLarge {
                size,
                max: max_size,
            });
        }

        Ok(Self { size })
    }

    /// Returns the side length N
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the number of cells (N²)
    pub fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Checks if the coordinate lies inside the grid
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Flat arena index (`y * N + x`) for an in-range coordinate
    pub fn index_of(&self, coord: Coordinate) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some((coord.y as usize) * (self.size as usize) + coord.x as usize)
    }

    /// Coordinate for a flat arena index
    pub fn coord_at(&self, index: usize) -> Option<Coordinate> {
        if index >= self.cell_count() {
            return None;
        }
        let size = self.size as usize;
        Some(Coordinate::new((index % size) as u32, (index / size) as u32))
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_creation_valid() {
        let grid = Grid::new(30, 256).unwrap();
        assert_eq!(grid.size(), 30);
        assert_eq!(grid.cell_count(), 900);
    }

    #[test]
    fn grid_creation_invalid() {
        assert_eq!(Grid::new(0, 256), Err(GridError::Empty));
        assert!(matches!(
            Grid::new(300, 256),
            Err(GridError::TooLarge { size: 300, max: 256 })
        ));
        // Boundary is inclusive
        assert!(Grid::new(256, 256).is_ok());
    }

    #[test]
    fn contains_validation() {
        let grid = Grid::new(3, 10).unwrap();
        assert!(grid.contains(Coordinate::new(0, 0)));
        assert!(grid.contains(Coordinate::new(2, 2)));
        assert!(!grid.contains(Coordinate::new(3, 0)));
        assert!(!grid.contains(Coordinate::new(0, 3)));
    }

    #[test]
    fn index_round_trip() {
        let grid = Grid::new(4, 10).unwrap();
        assert_eq!(grid.index_of(Coordinate::new(1, 2)), Some(9));
        assert_eq!(grid.coord_at(9), Some(Coordinate::new(1, 2)));
        assert_eq!(grid.index_of(Coordinate::new(4, 0)), None);
        assert_eq!(grid.coord_at(16), None);
    }
}
