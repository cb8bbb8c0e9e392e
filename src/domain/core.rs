//! Core domain types and operations
//!
//! This module defines the value types shared by every other domain module:
//! cell coordinates and the directions the cursors can travel in. Nothing here
//! knows about terminals or rendering.

use std::cmp::Ordering;
use std::fmt;

/// Cell coordinate on the canvas
///
/// Uses zero-based indexing starting from the top-left cell:
/// - (0,0) = top-left cell
/// - (1,0) = top row, second column
/// - (0,1) = second row, first column
///
/// Coordinates order row-major (by `y`, then `x`), which is also the order
/// cells are rendered and exported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    /// Creates a new coordinate
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The origin cell, where the primary cursor starts
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    /// Returns the component that moves along `axis`
    pub fn along(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Returns a copy with the component along `axis` replaced
    pub fn with_along(&self, axis: Axis, value: u32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(value, self.y),
            Axis::Vertical => Self::new(self.x, value),
        }
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis a cursor travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along a row (the `x` component)
    Horizontal,
    /// Along a column (the `y` component)
    Vertical,
}

/// Sense of travel along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toward {
    /// Decreasing component
    Negative,
    /// Increasing component
    Positive,
}

/// Navigation directions for the primary cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[cfg(test)]
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the axis this direction moves along
    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Returns whether this direction increases or decreases the component
    ///
    /// Screen coordinates grow downwards, so `Down` is positive.
    pub fn toward(self) -> Toward {
        match self {
            Direction::Up | Direction::Left => Toward::Negative,
            Direction::Down | Direction::Right => Toward::Positive,
        }
    }
}
