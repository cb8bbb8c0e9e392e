//! Cursor navigation
//!
//! Pure functions for moving the primary cursor and for placing auxiliary
//! cursors on the nearest still-unclaimed cell in a direction.
//!
//! ## Invariants
//! - `move_wrap` always returns an in-range coordinate for an in-range input
//! - `find_nearest_free` scans one direction only: no wraparound, no reversal
//! - The auxiliary set never receives a duplicate or out-of-range coordinate

use std::collections::BTreeSet;

use crate::domain::core::{Axis, Coordinate, Direction, Toward};

/// Moves one step in `direction`, wrapping at both edges
///
/// # Arguments
/// * `cursor` - Current cursor position (must be in range)
/// * `direction` - Direction of travel
/// * `size` - Grid side length N
pub fn move_wrap(cursor: Coordinate, direction: Direction, size: u32) -> Coordinate {
    if size == 0 {
        return cursor;
    }

    let axis = direction.axis();
    let current = cursor.along(axis);
    let last = size - 1;

    let next = match direction.toward() {
        Toward::Negative if current == 0 => last,
        Toward::Negative => current - 1,
        Toward::Positive if current >= last => 0,
        Toward::Positive => current + 1,
    };

    cursor.with_along(axis, next)
}

/// Finds the nearest coordinate past `cursor` that is not yet an auxiliary cursor
///
/// Candidates are examined at distance 1, 2, 3, … along `axis` in the sense
/// given by `toward`. The scan stops as soon as a candidate leaves
/// `[0, size-1]`, so it runs at most N steps.
///
/// # Returns
/// The first free coordinate, or `None` if the scan left the grid first
pub fn find_nearest_free(
    cursor: Coordinate,
    axis: Axis,
    toward: Toward,
    size: u32,
    auxiliary: &AuxiliaryCursors,
) -> Option<Coordinate> {
    let mut position = cursor.along(axis);

    loop {
        position = match toward {
            Toward::Negative => position.checked_sub(1)?,
            Toward::Positive => position.checked_add(1).filter(|next| *next < size)?,
        };

        let candidate = cursor.with_along(axis, position);
        if !auxiliary.contains(candidate) {
            return Some(candidate);
        }
    }
}

/// Set of auxiliary cursors
///
/// Populated only by the nearest-free search and cleared only on an explicit
/// cancel. Membership is independent of whether the cell is painted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuxiliaryCursors {
    cells: BTreeSet<Coordinate>,
}

impl AuxiliaryCursors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates auxiliary cursors in row-major order
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().copied()
    }

    /// Spawns one auxiliary cursor at the nearest free cell from `cursor`
    ///
    /// # Returns
    /// The spawned coordinate, or `None` if the search was exhausted (the set
    /// is left unchanged)
    pub fn spawn(
        &mut self,
        cursor: Coordinate,
        direction: Direction,
        size: u32,
    ) -> Option<Coordinate> {
        let found = find_nearest_free(cursor, direction.axis(), direction.toward(), size, self)?;
        self.cells.insert(found);
        Some(found)
    }

    /// Removes every auxiliary cursor
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
