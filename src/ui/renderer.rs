//! Canvas rendering for the terminal
//!
//! Turns the painting state into styled text. Rendering is a pure read: it
//! never mutates the store, and the store never holds eraser paint, so every
//! cell can be drawn straight from its resolved marker.

use ratatui::text::{Line, Span, Text};

use crate::domain::core::Coordinate;
use crate::domain::grid::Grid;
use crate::domain::navigation::AuxiliaryCursors;
use crate::domain::paint::{PaintStore, PaintType};
use crate::ui::theme::Theme;

pub const PRIMARY_CURSOR_GLYPH: &str = "@";
pub const AUXILIARY_CURSOR_GLYPH: &str = "+";

const HELP: &str =
    "hjkl move · space mark · p paint · t type · HJKL spawn · esc clear · e export · q quit";

/// Borrowed view of everything a frame needs
#[derive(Debug, Clone, Copy)]
pub struct CanvasFrame<'a> {
    pub grid: Grid,
    pub store: &'a PaintStore,
    pub cursor: Coordinate,
    pub auxiliary: &'a AuxiliaryCursors,
    pub paint_mode: bool,
    pub active: PaintType,
}

impl CanvasFrame<'_> {
    /// Renders one cell as `[<cursor><fill>]`
    pub fn cell(&self, coord: Coordinate, theme: &Theme) -> Vec<Span<'static>> {
        let cursor = if coord == self.cursor {
            Some(Span::styled(PRIMARY_CURSOR_GLYPH, theme.cursor))
        } else if self.auxiliary.contains(coord) {
            Some(Span::styled(AUXILIARY_CURSOR_GLYPH, theme.auxiliary))
        } else {
            None
        };

        let fill = match self.store.resolve_eraser(coord) {
            Some(marker) => Some(Span::styled(marker.glyph().to_string(), theme.marker(marker))),
            None if cursor.is_none() => Some(Span::raw(" ")),
            None => None,
        };

        let mut spans = Vec::with_capacity(4);
        spans.push(Span::raw("["));
        spans.extend(cursor);
        spans.extend(fill);
        spans.push(Span::raw("]"));
        spans
    }

    /// Rendered width of a cell: 4 when a cursor shares it with a marker, else 3
    pub fn cell_width(&self, coord: Coordinate) -> u16 {
        let has_cursor = coord == self.cursor || self.auxiliary.contains(coord);
        let has_fill = self.store.resolve_eraser(coord).is_some() || !has_cursor;
        2 + u16::from(has_cursor) + u16::from(has_fill)
    }

    /// Column where the primary cursor's cell starts in its row, and its width
    pub fn cursor_span(&self) -> (u16, u16) {
        let y = self.cursor.y;
        let start = (0..self.cursor.x)
            .map(|x| self.cell_width(Coordinate::new(x, y)))
            .fold(0u16, u16::saturating_add);
        (start, self.cell_width(self.cursor))
    }

    /// Renders one grid row
    pub fn row(&self, y: u32, theme: &Theme) -> Line<'static> {
        let spans: Vec<Span<'static>> = (0..self.grid.size())
            .flat_map(|x| self.cell(Coordinate::new(x, y), theme))
            .collect();
        Line::from(spans)
    }

    /// Renders every grid row, top to bottom
    #[cfg(test)]
    pub fn grid_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        (0..self.grid.size()).map(|y| self.row(y, theme)).collect()
    }

    /// Status footer: paint mode, active type, auxiliary cursor count, help
    pub fn footer(&self, theme: &Theme) -> Text<'static> {
        let mode = if self.paint_mode { "X" } else { " " };
        Text::from(vec![
            Line::default(),
            Line::from(vec![
                Span::raw(format!("Painting [{mode}]")),
                Span::raw("   Type: "),
                Span::styled(self.active.name(), active_style(self.active, theme)),
                Span::raw(format!("   Auxiliary: {}", self.auxiliary.len())),
            ]),
            Line::default(),
            Line::from(Span::styled(HELP, theme.help)),
        ])
    }
}

fn active_style(active: PaintType, theme: &Theme) -> ratatui::style::Style {
    match active.resolve() {
        Some(marker) => theme.marker(marker),
        None => theme.help,
    }
}

/// Header above the grid; reserved and currently empty
pub fn header() -> Text<'static> {
    Text::from(Line::default())
}

pub fn header_height() -> u16 {
    header().height() as u16
}

/// Height of the footer produced by [`CanvasFrame::footer`]
pub const FOOTER_HEIGHT: u16 = 4;

/// Shown until the first terminal size arrives
pub fn initializing() -> Text<'static> {
    Text::from(vec![Line::default(), Line::from("  Initializing...")])
}

/// Keeps the columns `[skip, skip + width)` of a line, splitting spans as needed
pub fn clip_line(line: Line<'static>, skip: usize, width: usize) -> Line<'static> {
    let mut column = 0;
    let mut spans = Vec::with_capacity(line.spans.len());
    for span in line.spans {
        let len = span.content.chars().count();
        let (start, end) = (column, column + len);
        column = end;
        if end <= skip {
            continue;
        }
        if start >= skip + width {
            break;
        }

        let from = skip.saturating_sub(start);
        let to = (skip + width - start).min(len);
        if from == 0 && to == len {
            spans.push(span);
        } else {
            let content: String = span.content.chars().skip(from).take(to - from).collect();
            spans.push(Span::styled(content, span.style));
        }
    }
    Line::from(spans)
}

/// Plain-string projection of styled text, one line per row
#[cfg(test)]
pub fn plain_text(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        grid: Grid,
        store: PaintStore,
        auxiliary: AuxiliaryCursors,
    }

    impl Fixture {
        fn new(size: u32) -> Self {
            let grid = Grid::new(size, 64).unwrap();
            Self {
                grid,
                store: PaintStore::new(grid),
                auxiliary: AuxiliaryCursors::new(),
            }
        }

        fn frame(&self, cursor: Coordinate) -> CanvasFrame<'_> {
            CanvasFrame {
                grid: self.grid,
                store: &self.store,
                cursor,
                auxiliary: &self.auxiliary,
                paint_mode: false,
                active: PaintType::Path,
            }
        }
    }

    fn render(frame: &CanvasFrame<'_>) -> String {
        plain_text(&Text::from(frame.grid_lines(&Theme::default())))
    }

    #[test]
    fn empty_grid_with_cursor_at_origin() {
        let fixture = Fixture::new(3);
        assert_eq!(
            render(&fixture.frame(Coordinate::ORIGIN)),
            "[@][ ][ ]\n[ ][ ][ ]\n[ ][ ][ ]"
        );
    }

    #[test]
    fn markers_and_cursors_combine() {
        let mut fixture = Fixture::new(3);
        fixture.store.apply(Coordinate::new(1, 0), PaintType::Path);
        fixture.store.apply(Coordinate::new(0, 0), PaintType::Obstacle);
        fixture.store.apply(Coordinate::new(2, 1), PaintType::Path);
        fixture.auxiliary.spawn(Coordinate::new(0, 1), crate::domain::core::Direction::Right, 3);
        fixture.auxiliary.spawn(Coordinate::new(0, 1), crate::domain::core::Direction::Right, 3);

        assert_eq!(
            render(&fixture.frame(Coordinate::ORIGIN)),
            "[@#][X][ ]\n[ ][+][+X]\n[ ][ ][ ]"
        );
    }

    #[test]
    fn primary_cursor_wins_over_auxiliary() {
        let mut fixture = Fixture::new(2);
        fixture.auxiliary.spawn(Coordinate::new(0, 0), crate::domain::core::Direction::Right, 2);
        assert_eq!(render(&fixture.frame(Coordinate::new(1, 0))), "[ ][@]\n[ ][ ]");
    }

    #[test]
    fn footer_reports_mode_and_type() {
        let fixture = Fixture::new(2);
        let mut frame = fixture.frame(Coordinate::ORIGIN);
        frame.paint_mode = true;
        frame.active = PaintType::Obstacle;

        let footer = frame.footer(&Theme::default());
        assert_eq!(footer.height() as u16, FOOTER_HEIGHT);
        let text = plain_text(&footer);
        assert!(text.contains("Painting [X]"));
        assert!(text.contains("Type: Obstacle"));
        assert!(text.contains("Auxiliary: 0"));
    }

    #[test]
    fn cell_widths_match_rendered_cells() {
        let mut fixture = Fixture::new(3);
        fixture.store.apply(Coordinate::new(0, 0), PaintType::Path);
        fixture.store.apply(Coordinate::new(2, 0), PaintType::Obstacle);
        let frame = fixture.frame(Coordinate::ORIGIN);
        let theme = Theme::default();

        for x in 0..3 {
            let coord = Coordinate::new(x, 0);
            let rendered: usize = frame
                .cell(coord, &theme)
                .iter()
                .map(|span| span.content.chars().count())
                .sum();
            assert_eq!(usize::from(frame.cell_width(coord)), rendered, "cell {coord}");
        }
    }

    #[test]
    fn cursor_span_counts_wide_cells() {
        let mut fixture = Fixture::new(4);
        fixture.store.apply(Coordinate::new(1, 1), PaintType::Path);
        fixture.store.apply(Coordinate::new(2, 1), PaintType::Path);
        // [ ][X][@X][ ]
        assert_eq!(fixture.frame(Coordinate::new(2, 1)).cursor_span(), (6, 4));
        assert_eq!(fixture.frame(Coordinate::new(0, 1)).cursor_span(), (0, 3));
    }

    #[test]
    fn clip_line_splits_spans() {
        let line = Line::from(vec![Span::raw("[@"), Span::raw("X]"), Span::raw("[ ]")]);
        let text = Text::from(vec![
            clip_line(line.clone(), 1, 4),
            clip_line(line.clone(), 0, 20),
            clip_line(line, 7, 3),
        ]);
        assert_eq!(plain_text(&text), "@X][\n[@X][ ]\n");
    }

    #[test]
    fn header_is_one_empty_line() {
        assert_eq!(header_height(), 1);
        assert_eq!(plain_text(&header()), "");
    }
}
