//! Viewport over the rendered grid
//!
//! The grid can be taller and wider than the terminal. The viewport remembers
//! the drawable area and scrolls just enough to keep a given row and column
//! span visible.

/// Scroll window over rendered grid rows and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    width: u16,
    height: u16,
    x_offset: u16,
    y_offset: u16,
    ready: bool,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the terminal size has been received at least once
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn x_offset(&self) -> u16 {
        self.x_offset
    }

    pub fn y_offset(&self) -> u16 {
        self.y_offset
    }

    /// Updates the drawable area; the first call completes initialization
    ///
    /// # Arguments
    /// * `width` - Terminal columns (at least 1 is kept)
    /// * `height` - Terminal rows available for the grid (at least 1 is kept)
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.ready = true;
    }

    /// Scrolls the minimum amount needed for `row` to be visible
    pub fn follow(&mut self, row: u16) {
        if row < self.y_offset {
            self.y_offset = row;
        } else if row >= self.y_offset.saturating_add(self.height) {
            self.y_offset = row + 1 - self.height;
        }
    }

    /// Scrolls the minimum amount needed for columns `[start, start + span)`
    ///
    /// A span wider than the viewport is aligned to its start.
    pub fn follow_column(&mut self, start: u16, span: u16) {
        let end = start.saturating_add(span);
        if start < self.x_offset || span > self.width {
            self.x_offset = start;
        } else if end > self.x_offset.saturating_add(self.width) {
            self.x_offset = end - self.width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_resize_marks_ready() {
        let mut viewport = Viewport::new();
        assert!(!viewport.is_ready());

        viewport.resize(80, 20);
        assert!(viewport.is_ready());
        assert_eq!((viewport.width(), viewport.height()), (80, 20));
    }

    #[test]
    fn height_never_drops_to_zero() {
        let mut viewport = Viewport::new();
        viewport.resize(10, 0);
        assert_eq!(viewport.height(), 1);
    }

    #[test]
    fn follow_scrolls_down_and_up() {
        let mut viewport = Viewport::new();
        viewport.resize(80, 5);

        viewport.follow(3);
        assert_eq!(viewport.y_offset(), 0);

        viewport.follow(7);
        assert_eq!(viewport.y_offset(), 3);

        viewport.follow(5);
        assert_eq!(viewport.y_offset(), 3);

        viewport.follow(1);
        assert_eq!(viewport.y_offset(), 1);
    }

    #[test]
    fn follow_column_keeps_span_in_view() {
        let mut viewport = Viewport::new();
        viewport.resize(10, 5);

        viewport.follow_column(6, 3);
        assert_eq!(viewport.x_offset(), 0);

        // Columns 9..13 need the window to end at 13
        viewport.follow_column(9, 4);
        assert_eq!(viewport.x_offset(), 3);

        viewport.follow_column(4, 3);
        assert_eq!(viewport.x_offset(), 3);

        viewport.follow_column(0, 3);
        assert_eq!(viewport.x_offset(), 0);
    }

    #[test]
    fn oversized_span_aligns_to_start() {
        let mut viewport = Viewport::new();
        viewport.resize(2, 5);
        viewport.follow_column(7, 4);
        assert_eq!(viewport.x_offset(), 7);
    }
}
