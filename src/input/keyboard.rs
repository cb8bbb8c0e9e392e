//! Key bindings
//!
//! Translates crossterm key events into the semantic commands of each window
//! phase. Only key presses are translated; repeats and releases reported by
//! some terminals are ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::domain::core::Direction;
use crate::ui::form::{FieldEdit, FocusStep};

/// Commands understood by the painting phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintCommand {
    /// Step the primary cursor (with wraparound)
    Move(Direction),
    TogglePaintMode,
    CyclePaintType,
    /// Toggle the cell under the primary cursor
    MarkCell,
    /// Spawn an auxiliary cursor at the nearest free cell in a direction
    SpawnAuxiliary(Direction),
    ClearAuxiliary,
    /// Leave painting and configure the export
    RequestExport,
    Quit,
}

impl PaintCommand {
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if is_ctrl_c(key) {
            return Some(PaintCommand::Quit);
        }
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }

        let command = match key.code {
            KeyCode::Char('q') => PaintCommand::Quit,

            KeyCode::Up | KeyCode::Char('k') => PaintCommand::Move(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => PaintCommand::Move(Direction::Down),
            KeyCode::Left | KeyCode::Char('h') => PaintCommand::Move(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => PaintCommand::Move(Direction::Right),

            KeyCode::Char('K') => PaintCommand::SpawnAuxiliary(Direction::Up),
            KeyCode::Char('J') => PaintCommand::SpawnAuxiliary(Direction::Down),
            KeyCode::Char('H') => PaintCommand::SpawnAuxiliary(Direction::Left),
            KeyCode::Char('L') => PaintCommand::SpawnAuxiliary(Direction::Right),
            KeyCode::Esc => PaintCommand::ClearAuxiliary,

            KeyCode::Char('p') => PaintCommand::TogglePaintMode,
            KeyCode::Char('t') => PaintCommand::CyclePaintType,
            KeyCode::Enter | KeyCode::Char(' ') => PaintCommand::MarkCell,
            KeyCode::Char('e') => PaintCommand::RequestExport,

            _ => return None,
        };

        Some(command)
    }
}

/// Commands understood by the resize and export forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommand {
    Quit,
    CycleCursorMode,
    Focus(FocusStep),
    /// Submit when the button is focused, otherwise focus the next position
    Enter,
    Edit(FieldEdit),
}

impl FormCommand {
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if is_ctrl_c(key) {
            return Some(FormCommand::Quit);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('r') => Some(FormCommand::CycleCursorMode),
                _ => None,
            };
        }

        let command = match key.code {
            KeyCode::Esc => FormCommand::Quit,
            KeyCode::Enter => FormCommand::Enter,
            KeyCode::Tab | KeyCode::Down => FormCommand::Focus(FocusStep::Next),
            KeyCode::BackTab | KeyCode::Up => FormCommand::Focus(FocusStep::Previous),
            KeyCode::Backspace => FormCommand::Edit(FieldEdit::Backspace),
            KeyCode::Delete => FormCommand::Edit(FieldEdit::Delete),
            KeyCode::Left => FormCommand::Edit(FieldEdit::Left),
            KeyCode::Right => FormCommand::Edit(FieldEdit::Right),
            KeyCode::Home => FormCommand::Edit(FieldEdit::Home),
            KeyCode::End => FormCommand::Edit(FieldEdit::End),
            KeyCode::Char(ch) => FormCommand::Edit(FieldEdit::Insert(ch)),
            _ => return None,
        };

        Some(command)
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn vim_and_arrow_keys_move() {
        assert_eq!(
            PaintCommand::from_key(&press(KeyCode::Char('k'))),
            Some(PaintCommand::Move(Direction::Up))
        );
        assert_eq!(
            PaintCommand::from_key(&press(KeyCode::Down)),
            Some(PaintCommand::Move(Direction::Down))
        );
        assert_eq!(
            PaintCommand::from_key(&press(KeyCode::Char('h'))),
            Some(PaintCommand::Move(Direction::Left))
        );
        assert_eq!(
            PaintCommand::from_key(&press(KeyCode::Right)),
            Some(PaintCommand::Move(Direction::Right))
        );
    }

    #[test]
    fn shifted_vim_keys_spawn_auxiliary() {
        let key = KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT);
        assert_eq!(
            PaintCommand::from_key(&key),
            Some(PaintCommand::SpawnAuxiliary(Direction::Right))
        );
        assert_eq!(
            PaintCommand::from_key(&press(KeyCode::Char('K'))),
            Some(PaintCommand::SpawnAuxiliary(Direction::Up))
        );
    }

    #[test]
    fn painting_bindings() {
        assert_eq!(
            PaintCommand::from_key(&press(KeyCode::Char(' '))),
            Some(PaintCommand::MarkCell)
        );
        assert_eq!(
            PaintCommand::from_key(&press(KeyCode::Enter)),
            Some(PaintCommand::MarkCell)
        );
        assert_eq!(
            PaintCommand::from_key(&press(KeyCode::Char('p'))),
            Some(PaintCommand::TogglePaintMode)
        );
        assert_eq!(
            PaintCommand::from_key(&press(KeyCode::Char('t'))),
            Some(PaintCommand::CyclePaintType)
        );
        assert_eq!(
            PaintCommand::from_key(&press(KeyCode::Esc)),
            Some(PaintCommand::ClearAuxiliary)
        );
        assert_eq!(
            PaintCommand::from_key(&press(KeyCode::Char('e'))),
            Some(PaintCommand::RequestExport)
        );
        assert_eq!(PaintCommand::from_key(&press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(PaintCommand::from_key(&press(KeyCode::Char('q'))), Some(PaintCommand::Quit));
        assert_eq!(PaintCommand::from_key(&ctrl('c')), Some(PaintCommand::Quit));
        assert_eq!(FormCommand::from_key(&ctrl('c')), Some(FormCommand::Quit));
        assert_eq!(FormCommand::from_key(&press(KeyCode::Esc)), Some(FormCommand::Quit));
    }

    #[test]
    fn control_and_alt_chords_do_not_paint() {
        assert_eq!(PaintCommand::from_key(&ctrl('l')), None);
        assert_eq!(PaintCommand::from_key(&ctrl('e')), None);
        let alt_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT);
        assert_eq!(PaintCommand::from_key(&alt_q), None);
        let ctrl_up = KeyEvent::new(KeyCode::Up, KeyModifiers::CONTROL);
        assert_eq!(PaintCommand::from_key(&ctrl_up), None);
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('k'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(PaintCommand::from_key(&release), None);
        assert_eq!(FormCommand::from_key(&release), None);
    }

    #[test]
    fn form_bindings() {
        assert_eq!(
            FormCommand::from_key(&press(KeyCode::Tab)),
            Some(FormCommand::Focus(FocusStep::Next))
        );
        assert_eq!(
            FormCommand::from_key(&press(KeyCode::BackTab)),
            Some(FormCommand::Focus(FocusStep::Previous))
        );
        assert_eq!(
            FormCommand::from_key(&press(KeyCode::Up)),
            Some(FormCommand::Focus(FocusStep::Previous))
        );
        assert_eq!(FormCommand::from_key(&press(KeyCode::Enter)), Some(FormCommand::Enter));
        assert_eq!(FormCommand::from_key(&ctrl('r')), Some(FormCommand::CycleCursorMode));
        assert_eq!(
            FormCommand::from_key(&press(KeyCode::Char('7'))),
            Some(FormCommand::Edit(FieldEdit::Insert('7')))
        );
        assert_eq!(FormCommand::from_key(&ctrl('x')), None);
    }
}
