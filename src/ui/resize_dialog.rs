//! Canvas size dialog
//!
//! Two numeric fields (height, width) and a submit button. Submitting with
//! input that does not parse, or that is out of bounds, ends the session:
//! there is no retry prompt.

use ratatui::text::{Line, Text};
use thiserror::Error;

use crate::config::EditorConfig;
use crate::domain::grid::{Grid, GridError};
use crate::input::keyboard::FormCommand;
use crate::ui::form::{
    cursor_mode_help, submit_button, CursorMode, FieldEdit, FocusRing, FocusStep, FormView,
    TextField,
};
use crate::ui::theme::Theme;

const HEIGHT_FIELD: usize = 0;
const WIDTH_FIELD: usize = 1;
const FIELD_COUNT: usize = 2;

/// Reason the submitted size was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResizeRejection {
    #[error("{field} {text:?} is not a non-negative integer")]
    NotANumber { field: &'static str, text: String },
    #[error("{field} {value} is out of bounds: {source}")]
    OutOfBounds {
        field: &'static str,
        value: u32,
        source: GridError,
    },
}

/// Validated canvas size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasDimensions {
    pub height: u32,
    pub width: u32,
}

impl CanvasDimensions {
    /// Side of the largest square that fits the requested area
    pub fn side(&self) -> u32 {
        self.height.min(self.width)
    }
}

/// Result of feeding one command to the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeOutcome {
    Pending,
    Validated(CanvasDimensions),
    Rejected(ResizeRejection),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeDialog {
    inputs: [TextField; FIELD_COUNT],
    focus: FocusRing,
    cursor_mode: CursorMode,
    max_size: u32,
    dimensions: Option<CanvasDimensions>,
}

impl ResizeDialog {
    /// Creates the dialog, optionally prefilling both fields with `prefill`
    pub fn new(config: &EditorConfig, prefill: Option<u32>) -> Self {
        let limit = config.field_char_limit;
        let mut inputs = [
            TextField::new("Height", limit),
            TextField::new("Width", limit),
        ];
        if let Some(size) = prefill {
            let text = size.to_string();
            for input in &mut inputs {
                input.set_value(&text);
            }
        }

        Self {
            inputs,
            focus: FocusRing::new(FIELD_COUNT),
            cursor_mode: CursorMode::default(),
            max_size: config.max_grid_size,
            dimensions: None,
        }
    }

    pub fn form_validated(&self) -> bool {
        self.dimensions.is_some()
    }

    /// Dimensions produced by a successful submit
    #[cfg(test)]
    pub fn dimensions(&self) -> Option<CanvasDimensions> {
        self.dimensions
    }

    #[cfg(test)]
    pub fn focus(&self) -> &FocusRing {
        &self.focus
    }

    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    #[cfg(test)]
    pub fn height_input(&self) -> &TextField {
        &self.inputs[HEIGHT_FIELD]
    }

    #[cfg(test)]
    pub fn width_input(&self) -> &TextField {
        &self.inputs[WIDTH_FIELD]
    }

    pub fn cycle_focus(&mut self, step: FocusStep) -> usize {
        self.focus.cycle(step)
    }

    pub fn cycle_cursor_mode(&mut self) -> CursorMode {
        self.cursor_mode = self.cursor_mode.next();
        self.cursor_mode
    }

    /// Edits the focused field; ignored while the button is focused
    pub fn edit(&mut self, edit: FieldEdit) -> bool {
        match self.inputs.get_mut(self.focus.index()) {
            Some(input) => input.apply(edit),
            None => false,
        }
    }

    /// Parses both fields, each from its own text
    pub fn submit(&mut self) -> Result<CanvasDimensions, ResizeRejection> {
        let height = self.parse_field(HEIGHT_FIELD, "height")?;
        let width = self.parse_field(WIDTH_FIELD, "width")?;

        let dimensions = CanvasDimensions { height, width };
        self.dimensions = Some(dimensions);
        Ok(dimensions)
    }

    fn parse_field(&self, field: usize, name: &'static str) -> Result<u32, ResizeRejection> {
        let text = self.inputs[field].value();
        let value = parse_dimension(text).ok_or_else(|| ResizeRejection::NotANumber {
            field: name,
            text: text.to_string(),
        })?;

        Grid::new(value, self.max_size).map_err(|source| ResizeRejection::OutOfBounds {
            field: name,
            value,
            source,
        })?;
        Ok(value)
    }

    /// Routes one form command
    pub fn handle(&mut self, command: FormCommand) -> ResizeOutcome {
        if self.form_validated() {
            return ResizeOutcome::Pending;
        }

        match command {
            FormCommand::Quit => ResizeOutcome::Quit,
            FormCommand::CycleCursorMode => {
                self.cycle_cursor_mode();
                ResizeOutcome::Pending
            }
            FormCommand::Enter if self.focus.is_submit() => match self.submit() {
                Ok(dimensions) => ResizeOutcome::Validated(dimensions),
                Err(rejection) => ResizeOutcome::Rejected(rejection),
            },
            FormCommand::Enter => {
                self.cycle_focus(FocusStep::Next);
                ResizeOutcome::Pending
            }
            FormCommand::Focus(step) => {
                self.cycle_focus(step);
                ResizeOutcome::Pending
            }
            FormCommand::Edit(edit) => {
                self.edit(edit);
                ResizeOutcome::Pending
            }
        }
    }

    pub fn view(&self, theme: &Theme) -> FormView {
        let mut lines: Vec<Line<'static>> = self
            .inputs
            .iter()
            .enumerate()
            .map(|(index, input)| input.view(self.focus.is_field(index), theme))
            .collect();
        lines.push(Line::default());
        lines.push(submit_button(self.focus.is_submit(), theme));
        lines.push(Line::default());
        lines.push(cursor_mode_help(self.cursor_mode, theme));

        let cursor = match self.cursor_mode {
            CursorMode::Hide => None,
            _ => self
                .inputs
                .get(self.focus.index())
                .map(|input| (input.cursor_column(), self.focus.index() as u16)),
        };

        FormView {
            text: Text::from(lines),
            cursor,
        }
    }
}

/// Parses an unsigned 32-bit dimension
///
/// Accepts decimal, or `0x`/`0o`/`0b` prefixed digits, with `_` separators
/// between digits. Surrounding whitespace is ignored.
pub fn parse_dimension(text: &str) -> Option<u32> {
    let text = text.trim();
    let (digits, radix) = match text.get(..2) {
        Some("0x" | "0X") => (&text[2..], 16),
        Some("0o" | "0O") => (&text[2..], 8),
        Some("0b" | "0B") => (&text[2..], 2),
        _ => (text, 10),
    };

    if digits.is_empty()
        || digits.starts_with(['_', '+', '-'])
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    let cleaned: String = digits.chars().filter(|ch| *ch != '_').collect();
    u32::from_str_radix(&cleaned, radix).ok()
}
