//! Export configuration dialog
//!
//! An output path field, a format selector and a submit button on the same
//! focus ring as the resize dialog. Submitting always succeeds: missing
//! pieces of the path are filled in from configuration.

use std::path::PathBuf;

use ratatui::text::{Line, Span, Text};

use crate::config::EditorConfig;
use crate::export::{resolve_path, ExportFormat, ExportSettings};
use crate::input::keyboard::FormCommand;
use crate::ui::form::{
    cursor_mode_help, submit_button, CursorMode, FieldEdit, FocusRing, FocusStep, FormView,
    TextField, PROMPT,
};
use crate::ui::theme::Theme;

const PATH_FIELD: usize = 0;
const FORMAT_FIELD: usize = 1;
const FIELD_COUNT: usize = 2;

pub const PATH_CHAR_LIMIT: usize = 255;

/// Result of feeding one command to the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Pending,
    Confirmed(ExportSettings),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDialog {
    path: TextField,
    format: ExportFormat,
    focus: FocusRing,
    cursor_mode: CursorMode,
    export_dir: PathBuf,
    cell_px: u32,
}

impl ExportDialog {
    pub fn new(config: &EditorConfig, cursor_mode: CursorMode) -> Self {
        Self {
            path: TextField::new("Output path (empty for default)", PATH_CHAR_LIMIT),
            format: ExportFormat::default(),
            focus: FocusRing::new(FIELD_COUNT),
            cursor_mode,
            export_dir: config.export_dir.clone(),
            cell_px: config.export_cell_px,
        }
    }

    #[cfg(test)]
    pub fn path_input(&self) -> &TextField {
        &self.path
    }

    #[cfg(test)]
    pub fn format(&self) -> ExportFormat {
        self.format
    }

    #[cfg(test)]
    pub fn focus(&self) -> &FocusRing {
        &self.focus
    }

    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    /// Settings the dialog would confirm right now
    pub fn settings(&self) -> ExportSettings {
        ExportSettings {
            path: resolve_path(self.path.value(), &self.export_dir, self.format),
            format: self.format,
            cell_px: self.cell_px,
        }
    }

    fn edit(&mut self, edit: FieldEdit) {
        match self.focus.index() {
            PATH_FIELD => {
                self.path.apply(edit);
            }
            FORMAT_FIELD => match edit {
                FieldEdit::Right | FieldEdit::Insert(' ') => self.format = self.format.next(),
                FieldEdit::Left => self.format = self.format.previous(),
                _ => {}
            },
            _ => {}
        }
    }

    /// Routes one form command
    pub fn handle(&mut self, command: FormCommand) -> ExportOutcome {
        match command {
            FormCommand::Quit => return ExportOutcome::Quit,
            FormCommand::Enter if self.focus.is_submit() => {
                return ExportOutcome::Confirmed(self.settings());
            }
            FormCommand::Enter => {
                self.focus.cycle(FocusStep::Next);
            }
            FormCommand::Focus(step) => {
                self.focus.cycle(step);
            }
            FormCommand::CycleCursorMode => self.cursor_mode = self.cursor_mode.next(),
            FormCommand::Edit(edit) => self.edit(edit),
        }
        ExportOutcome::Pending
    }

    fn format_line(&self, theme: &Theme) -> Line<'static> {
        let focused = self.focus.is_field(FORMAT_FIELD);
        let mut spans = vec![Span::styled(
            PROMPT,
            if focused { theme.focused } else { theme.blurred },
        )];
        for (i, format) in ExportFormat::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let label = format!("<{}>", format.name());
            spans.push(if format == self.format {
                Span::styled(label, theme.focused)
            } else {
                Span::styled(label, theme.blurred)
            });
        }
        Line::from(spans)
    }

    pub fn view(&self, theme: &Theme) -> FormView {
        let lines = vec![
            Line::from(Span::styled("Export canvas", theme.help)),
            self.path.view(self.focus.is_field(PATH_FIELD), theme),
            self.format_line(theme),
            Line::default(),
            submit_button(self.focus.is_submit(), theme),
            Line::default(),
            cursor_mode_help(self.cursor_mode, theme),
        ];

        // Only the path field takes a text cursor; it sits below the title
        let cursor = match self.cursor_mode {
            CursorMode::Hide => None,
            _ if self.focus.is_field(PATH_FIELD) => Some((self.path.cursor_column(), 1)),
            _ => None,
        };

        FormView {
            text: Text::from(lines),
            cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::renderer::plain_text;

    fn config() -> EditorConfig {
        EditorConfig {
            export_dir: PathBuf::from("/tmp/exports"),
            ..EditorConfig::default()
        }
    }

    fn dialog() -> ExportDialog {
        ExportDialog::new(&config(), CursorMode::default())
    }

    fn type_text(dialog: &mut ExportDialog, text: &str) {
        for ch in text.chars() {
            dialog.handle(FormCommand::Edit(FieldEdit::Insert(ch)));
        }
    }

    #[test]
    fn empty_path_uses_export_dir() {
        let mut dialog = dialog();
        dialog.handle(FormCommand::Focus(FocusStep::Previous));
        assert!(dialog.focus().is_submit());

        match dialog.handle(FormCommand::Enter) {
            ExportOutcome::Confirmed(settings) => {
                assert_eq!(settings.path, PathBuf::from("/tmp/exports/canvas.txt"));
                assert_eq!(settings.format, ExportFormat::Text);
                assert_eq!(settings.cell_px, EditorConfig::DEFAULT_CELL_PX);
            }
            other => panic!("expected confirmation, got {other:?}"),
        }
    }

    #[test]
    fn typed_path_gets_format_extension() {
        let mut dialog = dialog();
        type_text(&mut dialog, "out/maze");
        dialog.handle(FormCommand::Focus(FocusStep::Next));
        dialog.handle(FormCommand::Edit(FieldEdit::Right));
        dialog.handle(FormCommand::Edit(FieldEdit::Right));

        assert_eq!(dialog.format(), ExportFormat::Png);
        assert_eq!(dialog.settings().path, PathBuf::from("out/maze.png"));
    }

    #[test]
    fn format_selector_cycles_both_ways() {
        let mut dialog = dialog();
        dialog.handle(FormCommand::Enter);
        assert!(dialog.focus().is_field(FORMAT_FIELD));

        dialog.handle(FormCommand::Edit(FieldEdit::Left));
        assert_eq!(dialog.format(), ExportFormat::Png);
        dialog.handle(FormCommand::Edit(FieldEdit::Insert(' ')));
        assert_eq!(dialog.format(), ExportFormat::Text);
        // Other characters do not touch the selector or the path
        dialog.handle(FormCommand::Edit(FieldEdit::Insert('x')));
        assert_eq!(dialog.format(), ExportFormat::Text);
        assert_eq!(dialog.path_input().value(), "");
    }

    #[test]
    fn arrows_edit_path_when_focused() {
        let mut dialog = dialog();
        type_text(&mut dialog, "ab");
        dialog.handle(FormCommand::Edit(FieldEdit::Left));
        type_text(&mut dialog, "c");
        assert_eq!(dialog.path_input().value(), "acb");
        assert_eq!(dialog.format(), ExportFormat::Text);
    }

    #[test]
    fn quit_from_any_position() {
        let mut dialog = dialog();
        dialog.handle(FormCommand::Focus(FocusStep::Next));
        assert_eq!(dialog.handle(FormCommand::Quit), ExportOutcome::Quit);
    }

    #[test]
    fn view_marks_selected_format() {
        let theme = Theme::default();
        let mut dialog = dialog();
        type_text(&mut dialog, "a");

        let view = dialog.view(&theme);
        let text = plain_text(&view.text);
        assert!(text.contains("> a"));
        assert!(text.contains("<Text> <JSON> <PNG>"));
        assert_eq!(view.cursor, Some((3, 1)));

        dialog.handle(FormCommand::Focus(FocusStep::Next));
        assert_eq!(dialog.view(&theme).cursor, None);
    }
}
