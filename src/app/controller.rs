//! Application controller
//!
//! Runs the single-threaded event loop: one terminal event is fully
//! dispatched through the state machine and redrawn before the next is read.

use std::path::PathBuf;

use crossterm::event::Event;
use thiserror::Error;

use crate::app::state::{AppEvent, Control, QuitReason, WindowStateMachine};
use crate::config::{ConfigError, EditorConfig};
use crate::export::ExportError;
use crate::platform::terminal::{TerminalError, TerminalSession};
use crate::ui::resize_dialog::ResizeRejection;
use crate::ui::theme::Theme;

/// Unrecoverable errors, reported at the process boundary with exit code 1
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Terminal(#[from] TerminalError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("Failed to start logging: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
    #[error("Failed to create log directory {path}: {source}")]
    LogDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    Quit,
    Rejected(ResizeRejection),
    Exported(PathBuf),
}

pub struct AppController {
    machine: WindowStateMachine,
}

impl AppController {
    pub fn new(config: EditorConfig, prefill: Option<u32>) -> Self {
        let theme = Theme::from_config(&config.theme);
        Self {
            machine: WindowStateMachine::new(config, theme, prefill),
        }
    }

    #[cfg(test)]
    pub fn machine(&self) -> &WindowStateMachine {
        &self.machine
    }

    /// Translates a terminal event; mouse, focus and paste events are dropped
    pub fn translate(event: Event) -> Option<AppEvent> {
        match event {
            Event::Key(key) => Some(AppEvent::Key(key)),
            Event::Resize(width, height) => Some(AppEvent::Resize { width, height }),
            _ => None,
        }
    }

    /// Feeds one event through the machine, performing the export if it starts
    ///
    /// # Returns
    /// `Some(exit)` once the session is over
    pub fn dispatch(&mut self, event: AppEvent) -> Result<Option<Exit>, AppError> {
        match self.machine.handle(event) {
            Control::Continue => Ok(None),
            Control::Quit(QuitReason::User) => {
                log::info!("Quit requested in {}", self.machine.phase().name());
                Ok(Some(Exit::Quit))
            }
            Control::Quit(QuitReason::Rejected(rejection)) => Ok(Some(Exit::Rejected(rejection))),
            Control::Export => match self.machine.export_job() {
                Some(job) => {
                    let path = job.write(self.machine.theme())?;
                    Ok(Some(Exit::Exported(path)))
                }
                None => Ok(None),
            },
        }
    }

    /// Runs the event loop until the session ends
    pub fn run(&mut self, session: &mut TerminalSession) -> Result<Exit, AppError> {
        let (width, height) = session.size()?;
        if let Some(exit) = self.dispatch(AppEvent::Resize { width, height })? {
            return Ok(exit);
        }

        loop {
            session.draw(&self.machine.view())?;

            let Some(event) = Self::translate(session.read_event()?) else {
                continue;
            };
            if let Some(exit) = self.dispatch(event)? {
                return Ok(exit);
            }
        }
    }
}
