//! Paint engine
//!
//! Applies the user's paint commands to the cell store. All operations are
//! total over in-range coordinates; the navigator guarantees callers never
//! hold an out-of-range cursor.

use crate::domain::core::Coordinate;
use crate::domain::grid::Grid;
use crate::domain::paint::{PaintStore, PaintType};

/// Paint state of the painting phase: the store, the active paint and drag mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintEngine {
    store: PaintStore,
    active: PaintType,
    paint_mode: bool,
}

impl PaintEngine {
    /// Creates an engine with an empty store, Path selected and drag-paint off
    pub fn new(grid: Grid) -> Self {
        Self {
            store: PaintStore::new(grid),
            active: PaintType::default(),
            paint_mode: false,
        }
    }

    pub fn store(&self) -> &PaintStore {
        &self.store
    }

    /// Paint type applied by the next toggle or drag-paint
    pub fn active_type(&self) -> PaintType {
        self.active
    }

    /// Whether cursor movement also paints
    pub fn paint_mode(&self) -> bool {
        self.paint_mode
    }

    /// Unmarks a marked cell, otherwise paints it with the active type
    ///
    /// With the eraser active an unmarked cell stays unmarked.
    pub fn toggle(&mut self, cursor: Coordinate) {
        if self.store.remove(cursor).is_none() {
            self.store.apply(cursor, self.active);
        }
    }

    /// Paints the cell with the active type, overwriting any prior marker
    pub fn drag_paint(&mut self, cursor: Coordinate) {
        self.store.apply(cursor, self.active);
    }

    /// Advances the active paint type (Path → Obstacle → Eraser → Path)
    pub fn cycle_type(&mut self) -> PaintType {
        self.active = self.active.next();
        self.active
    }

    /// Flips drag-paint mode
    pub fn toggle_paint_mode(&mut self) -> bool {
        self.paint_mode = !self.paint_mode;
        self.paint_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::paint::Marker;

    fn engine() -> PaintEngine {
        PaintEngine::new(Grid::new(5, 64).unwrap())
    }

    #[test]
    fn engine_starts_idle() {
        let engine = engine();
        assert_eq!(engine.active_type(), PaintType::Path);
        assert!(!engine.paint_mode());
        assert!(engine.store().is_empty());
    }

    #[test]
    fn toggle_marks_then_unmarks() {
        let mut engine = engine();
        let cell = Coordinate::new(1, 2);

        engine.toggle(cell);
        assert_eq!(engine.store().get(cell), Some(Marker::Path));

        engine.toggle(cell);
        assert_eq!(engine.store().get(cell), None);
    }

    fn select(engine: &mut PaintEngine, paint: PaintType) {
        while engine.active_type() != paint {
            engine.cycle_type();
        }
    }

    #[test]
    fn toggle_pair_restores_unmarked_cell() {
        let mut engine = engine();
        engine.toggle(Coordinate::new(0, 0));
        let cell = Coordinate::new(4, 1);

        for paint in [PaintType::Path, PaintType::Obstacle, PaintType::Eraser] {
            select(&mut engine, paint);
            let before = engine.store().clone();
            engine.toggle(cell);
            engine.toggle(cell);
            assert_eq!(engine.store(), &before, "{paint:?}");
        }
    }

    #[test]
    fn toggle_pair_remarks_with_active_type() {
        let mut engine = engine();
        let cell = Coordinate::new(3, 3);
        engine.toggle(cell);
        assert_eq!(engine.store().get(cell), Some(Marker::Path));

        select(&mut engine, PaintType::Obstacle);
        engine.toggle(cell);
        engine.toggle(cell);
        assert_eq!(engine.store().get(cell), Some(Marker::Obstacle));

        // Eraser leaves nothing to re-mark with
        select(&mut engine, PaintType::Eraser);
        engine.toggle(cell);
        engine.toggle(cell);
        assert_eq!(engine.store().get(cell), None);
    }

    #[test]
    fn toggle_marked_cell_keeps_type_when_unchanged() {
        let mut engine = engine();
        let cell = Coordinate::new(2, 2);
        engine.cycle_type();
        engine.toggle(cell);
        let before = engine.store().clone();

        engine.toggle(cell);
        engine.toggle(cell);
        assert_eq!(engine.store(), &before);
    }

    #[test]
    fn toggle_with_eraser_on_empty_cell_is_noop() {
        let mut engine = engine();
        engine.cycle_type();
        engine.cycle_type();
        assert_eq!(engine.active_type(), PaintType::Eraser);

        engine.toggle(Coordinate::new(1, 1));
        assert!(engine.store().is_empty());
    }

    #[test]
    fn toggle_with_eraser_on_marked_cell_unmarks() {
        let mut engine = engine();
        let cell = Coordinate::new(1, 1);
        engine.toggle(cell);
        engine.cycle_type();
        engine.cycle_type();

        engine.toggle(cell);
        assert!(!engine.store().contains(cell));
    }

    #[test]
    fn drag_paint_overwrites() {
        let mut engine = engine();
        let cell = Coordinate::new(4, 0);

        engine.drag_paint(cell);
        assert_eq!(engine.store().get(cell), Some(Marker::Path));

        engine.cycle_type();
        engine.drag_paint(cell);
        assert_eq!(engine.store().get(cell), Some(Marker::Obstacle));

        // Painting the same type again keeps the cell marked
        engine.drag_paint(cell);
        assert_eq!(engine.store().get(cell), Some(Marker::Obstacle));
    }

    #[test]
    fn drag_paint_with_eraser_clears_cell() {
        let mut engine = engine();
        let cell = Coordinate::new(0, 4);
        engine.drag_paint(cell);
        engine.cycle_type();
        engine.cycle_type();

        engine.drag_paint(cell);
        assert_eq!(engine.store().resolve_eraser(cell), None);
        assert!(engine.store().is_empty());
    }

    #[test]
    fn cycle_type_three_times_returns_to_path() {
        let mut engine = engine();
        engine.cycle_type();
        engine.cycle_type();
        assert_eq!(engine.cycle_type(), PaintType::Path);
    }

    #[test]
    fn toggle_paint_mode_flips() {
        let mut engine = engine();
        assert!(engine.toggle_paint_mode());
        assert!(!engine.toggle_paint_mode());
    }
}
