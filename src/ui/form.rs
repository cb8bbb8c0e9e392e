//! Form widgets shared by the resize and export dialogs
//!
//! A single-line text field, the focus ring that cycles through fields and
//! the submit button, and the cosmetic cursor-blink mode.

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};

use crate::ui::theme::Theme;

/// Prompt drawn in front of every text field
pub const PROMPT: &str = "> ";

/// Editing operations a focused text field understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Display mode of the text cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    #[default]
    Blink,
    Static,
    Hide,
}

impl CursorMode {
    /// Cycles Blink → Static → Hide → Blink
    pub fn next(self) -> Self {
        match self {
            CursorMode::Blink => CursorMode::Static,
            CursorMode::Static => CursorMode::Hide,
            CursorMode::Hide => CursorMode::Blink,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CursorMode::Blink => "blink",
            CursorMode::Static => "static",
            CursorMode::Hide => "hidden",
        }
    }
}

/// Step taken by the focus ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusStep {
    Next,
    Previous,
}

/// Focus over `field_count` fields followed by the submit button
///
/// Positions form a ring of `field_count + 1`; index `field_count` is the
/// submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    index: usize,
    field_count: usize,
}

impl FocusRing {
    pub fn new(field_count: usize) -> Self {
        Self {
            index: 0,
            field_count,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_submit(&self) -> bool {
        self.index == self.field_count
    }

    pub fn is_field(&self, field: usize) -> bool {
        self.index == field
    }

    /// Moves focus one position with wraparound in both directions
    pub fn cycle(&mut self, step: FocusStep) -> usize {
        let positions = self.field_count + 1;
        self.index = match step {
            FocusStep::Next => (self.index + 1) % positions,
            FocusStep::Previous if self.index == 0 => self.field_count,
            FocusStep::Previous => self.index - 1,
        };
        self.index
    }
}

/// Single-line text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    value: String,
    placeholder: &'static str,
    char_limit: usize,
    /// Cursor position in characters
    cursor: usize,
}

impl TextField {
    pub fn new(placeholder: &'static str, char_limit: usize) -> Self {
        Self {
            value: String::new(),
            placeholder,
            char_limit,
            cursor: 0,
        }
    }

    /// Builder-style initial value, truncated to the character limit
    #[cfg(test)]
    pub fn with_value(mut self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().take(self.char_limit).collect();
        self.cursor = self.value.chars().count();
    }

    /// Applies an edit, returning whether the value or cursor changed
    pub fn apply(&mut self, edit: FieldEdit) -> bool {
        let len = self.value.chars().count();
        match edit {
            FieldEdit::Insert(ch) => {
                if len >= self.char_limit || ch.is_control() {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.value.insert(at, ch);
                self.cursor += 1;
                true
            }
            FieldEdit::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let at = self.byte_offset(self.cursor - 1);
                self.value.remove(at);
                self.cursor -= 1;
                true
            }
            FieldEdit::Delete => {
                if self.cursor >= len {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.value.remove(at);
                true
            }
            FieldEdit::Left => {
                let to = self.cursor.saturating_sub(1);
                move_cursor(&mut self.cursor, to)
            }
            FieldEdit::Right => {
                let to = (self.cursor + 1).min(len);
                move_cursor(&mut self.cursor, to)
            }
            FieldEdit::Home => move_cursor(&mut self.cursor, 0),
            FieldEdit::End => move_cursor(&mut self.cursor, len),
        }
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.value
            .char_indices()
            .nth(chars)
            .map_or(self.value.len(), |(offset, _)| offset)
    }

    /// Renders the prompt and value (or placeholder when empty)
    pub fn view(&self, focused: bool, theme: &Theme) -> Line<'static> {
        let style = if focused { theme.focused } else { Style::default() };
        let body = if self.value.is_empty() {
            Span::styled(self.placeholder.to_string(), theme.blurred)
        } else {
            Span::styled(self.value.clone(), style)
        };
        Line::from(vec![Span::styled(PROMPT, style), body])
    }

    /// Column of the text cursor relative to the start of the line
    pub fn cursor_column(&self) -> u16 {
        (PROMPT.chars().count() + self.cursor) as u16
    }
}

fn move_cursor(cursor: &mut usize, to: usize) -> bool {
    let moved = *cursor != to;
    *cursor = to;
    moved
}

/// Rendered form: styled lines plus where the terminal cursor should sit
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub text: Text<'static>,
    /// (column, row) relative to the form's top-left corner; `None` hides it
    pub cursor: Option<(u16, u16)>,
}

/// Renders the submit button in its focused or blurred style
pub fn submit_button(focused: bool, theme: &Theme) -> Line<'static> {
    if focused {
        Line::from(Span::styled("[ Submit ]", theme.focused))
    } else {
        Line::from(vec![
            Span::raw("[ "),
            Span::styled("Submit", theme.blurred),
            Span::raw(" ]"),
        ])
    }
}

/// Renders the cursor-mode help line
pub fn cursor_mode_help(mode: CursorMode, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("cursor mode is ", theme.help),
        Span::styled(mode.name(), theme.cursor_mode),
        Span::styled(" (ctrl+r to change style)", theme.help),
    ])
}
