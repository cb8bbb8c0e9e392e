//! Terminal surface
//!
//! Raw mode and the alternate screen are held by [`TerminalSession`] and
//! released on drop, including when the event loop bails out with an error.

use std::io::{self, Stdout};

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use thiserror::Error;

use crate::app::state::Screen;
use crate::ui::form::CursorMode;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("Failed to set up the terminal: {0}")]
    Setup(#[source] io::Error),
    #[error("Failed to draw to the terminal: {0}")]
    Draw(#[source] io::Error),
    #[error("Failed to read terminal input: {0}")]
    Input(#[source] io::Error),
}

/// Cursor shape for a form cursor mode; `None` when the cursor is hidden
pub fn cursor_style(mode: CursorMode) -> Option<SetCursorStyle> {
    match mode {
        CursorMode::Blink => Some(SetCursorStyle::BlinkingBlock),
        CursorMode::Static => Some(SetCursorStyle::SteadyBlock),
        CursorMode::Hide => None,
    }
}

pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    cursor_mode: Option<CursorMode>,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode().map_err(TerminalError::Setup)?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            TerminalError::Setup(err)
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            TerminalError::Setup(err)
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            TerminalError::Setup(err)
        })?;

        log::debug!("Terminal session started");
        Ok(Self {
            terminal,
            cursor_mode: None,
        })
    }

    /// Current terminal size as (columns, rows)
    pub fn size(&self) -> Result<(u16, u16), TerminalError> {
        let size = self.terminal.size().map_err(TerminalError::Setup)?;
        Ok((size.width, size.height))
    }

    /// Blocks until the next terminal event
    pub fn read_event(&self) -> Result<Event, TerminalError> {
        event::read().map_err(TerminalError::Input)
    }

    pub fn draw(&mut self, screen: &Screen) -> Result<(), TerminalError> {
        self.terminal
            .draw(|frame| {
                frame.render_widget(Paragraph::new(screen.text.clone()), frame.area());
                if let Some(position) = screen.cursor {
                    frame.set_cursor_position(position);
                }
            })
            .map_err(TerminalError::Draw)?;

        if screen.cursor.is_some() && self.cursor_mode != Some(screen.cursor_mode) {
            if let Some(style) = cursor_style(screen.cursor_mode) {
                execute!(self.terminal.backend_mut(), style).map_err(TerminalError::Draw)?;
            }
            self.cursor_mode = Some(screen.cursor_mode);
        }
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(self.terminal.backend_mut(), SetCursorStyle::DefaultUserShape);
        let _ = self.terminal.show_cursor();
        teardown_terminal();
        log::debug!("Terminal session restored");
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_modes_map_to_shapes() {
        assert!(matches!(
            cursor_style(CursorMode::Blink),
            Some(SetCursorStyle::BlinkingBlock)
        ));
        assert!(matches!(
            cursor_style(CursorMode::Static),
            Some(SetCursorStyle::SteadyBlock)
        ));
        assert!(cursor_style(CursorMode::Hide).is_none());
    }
}
