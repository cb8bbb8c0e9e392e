//! Window state machine
//!
//! The application moves through Resizing → Painting → ConfiguringExport →
//! Exporting, one way only. Each phase owns its state and is the only
//! receiver of input events while active.

use crossterm::event::KeyEvent;
use ratatui::text::{Line, Text};

use crate::app::painting::{PaintOutcome, PaintingState};
use crate::config::EditorConfig;
use crate::domain::grid::Grid;
use crate::export::{CanvasSnapshot, ExportJob};
use crate::input::keyboard::{FormCommand, PaintCommand};
use crate::ui::export_dialog::{ExportDialog, ExportOutcome};
use crate::ui::form::CursorMode;
use crate::ui::resize_dialog::{CanvasDimensions, ResizeDialog, ResizeOutcome, ResizeRejection};
use crate::ui::theme::Theme;

/// Active window phase with its private state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowPhase {
    Resizing(ResizeDialog),
    Painting(PaintingState),
    /// The canvas is frozen once export is requested
    ConfiguringExport {
        snapshot: CanvasSnapshot,
        dialog: ExportDialog,
    },
    /// Terminal phase; the controller writes the job and exits
    Exporting(ExportJob),
}

impl WindowPhase {
    pub fn name(&self) -> &'static str {
        match self {
            WindowPhase::Resizing(_) => "Resizing",
            WindowPhase::Painting(_) => "Painting",
            WindowPhase::ConfiguringExport { .. } => "ConfiguringExport",
            WindowPhase::Exporting(_) => "Exporting",
        }
    }
}

/// Input events delivered to the active phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Terminal size in columns and rows
    Resize { width: u16, height: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuitReason {
    User,
    /// The resize form refused its input; the session ends without retry
    Rejected(ResizeRejection),
}

/// What the event loop should do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit(QuitReason),
    /// The machine entered Exporting
    Export,
}

/// Everything the terminal needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub text: Text<'static>,
    /// Text cursor position (column, row); `None` hides it
    pub cursor: Option<(u16, u16)>,
    pub cursor_mode: CursorMode,
}

#[derive(Debug, Clone)]
pub struct WindowStateMachine {
    phase: WindowPhase,
    config: EditorConfig,
    theme: Theme,
    /// Last terminal size notified, replayed into phases created later
    surface: Option<(u16, u16)>,
    cursor_mode: CursorMode,
}

impl WindowStateMachine {
    /// Starts in Resizing, prefilling the form with `prefill` if given
    pub fn new(config: EditorConfig, theme: Theme, prefill: Option<u32>) -> Self {
        let dialog = ResizeDialog::new(&config, prefill.or(config.default_size));
        Self {
            phase: WindowPhase::Resizing(dialog),
            config,
            theme,
            surface: None,
            cursor_mode: CursorMode::default(),
        }
    }

    pub fn phase(&self) -> &WindowPhase {
        &self.phase
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The job to write once the machine is in Exporting
    pub fn export_job(&self) -> Option<&ExportJob> {
        match &self.phase {
            WindowPhase::Exporting(job) => Some(job),
            _ => None,
        }
    }

    /// Dispatches one event to the active phase
    pub fn handle(&mut self, event: AppEvent) -> Control {
        match event {
            AppEvent::Resize { width, height } => {
                self.surface = Some((width, height));
                if let WindowPhase::Painting(painting) = &mut self.phase {
                    painting.resize(width, height);
                }
                Control::Continue
            }
            AppEvent::Key(key) => self.handle_key(&key),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Control {
        match &mut self.phase {
            WindowPhase::Resizing(dialog) => {
                let Some(command) = FormCommand::from_key(key) else {
                    return Control::Continue;
                };
                let outcome = dialog.handle(command);
                self.cursor_mode = dialog.cursor_mode();
                match outcome {
                    ResizeOutcome::Pending => Control::Continue,
                    ResizeOutcome::Quit => Control::Quit(QuitReason::User),
                    ResizeOutcome::Rejected(rejection) => {
                        log::warn!("Canvas size rejected: {rejection}");
                        Control::Quit(QuitReason::Rejected(rejection))
                    }
                    ResizeOutcome::Validated(dimensions) => self.start_painting(dimensions),
                }
            }
            WindowPhase::Painting(painting) => {
                let Some(command) = PaintCommand::from_key(key) else {
                    return Control::Continue;
                };
                match painting.handle(command) {
                    PaintOutcome::Continue => Control::Continue,
                    PaintOutcome::Quit => Control::Quit(QuitReason::User),
                    PaintOutcome::RequestExport => {
                        let snapshot = painting.snapshot();
                        log::info!(
                            "Painting -> ConfiguringExport ({} marked cells)",
                            snapshot.cells.len()
                        );
                        self.phase = WindowPhase::ConfiguringExport {
                            snapshot,
                            dialog: ExportDialog::new(&self.config, self.cursor_mode),
                        };
                        Control::Continue
                    }
                }
            }
            WindowPhase::ConfiguringExport { snapshot, dialog } => {
                let Some(command) = FormCommand::from_key(key) else {
                    return Control::Continue;
                };
                let outcome = dialog.handle(command);
                self.cursor_mode = dialog.cursor_mode();
                match outcome {
                    ExportOutcome::Pending => Control::Continue,
                    ExportOutcome::Quit => Control::Quit(QuitReason::User),
                    ExportOutcome::Confirmed(settings) => {
                        log::info!(
                            "ConfiguringExport -> Exporting ({} to {})",
                            settings.format.name(),
                            settings.path.display()
                        );
                        let job = ExportJob {
                            snapshot: std::mem::take(snapshot),
                            settings,
                        };
                        self.phase = WindowPhase::Exporting(job);
                        Control::Export
                    }
                }
            }
            WindowPhase::Exporting(_) => Control::Continue,
        }
    }

    fn start_painting(&mut self, dimensions: CanvasDimensions) -> Control {
        let side = dimensions.side();
        let grid = match Grid::new(side, self.config.max_grid_size) {
            Ok(grid) => grid,
            Err(source) => {
                let rejection = ResizeRejection::OutOfBounds {
                    field: "side",
                    value: side,
                    source,
                };
                log::warn!("Canvas size rejected: {rejection}");
                return Control::Quit(QuitReason::Rejected(rejection));
            }
        };

        let mut painting = PaintingState::new(grid);
        if let Some((width, height)) = self.surface {
            painting.resize(width, height);
        }
        log::info!(
            "Resizing -> Painting ({}x{} requested, {side}x{side} grid)",
            dimensions.height,
            dimensions.width
        );
        self.phase = WindowPhase::Painting(painting);
        Control::Continue
    }

    pub fn view(&self) -> Screen {
        let (text, cursor) = match &self.phase {
            WindowPhase::Resizing(dialog) => {
                let form = dialog.view(&self.theme);
                (form.text, form.cursor)
            }
            WindowPhase::Painting(painting) => (painting.view(&self.theme), None),
            WindowPhase::ConfiguringExport { dialog, .. } => {
                let form = dialog.view(&self.theme);
                (form.text, form.cursor)
            }
            WindowPhase::Exporting(job) => (
                Text::from(vec![
                    Line::default(),
                    Line::from(format!("  Exporting to {}...", job.settings.path.display())),
                ]),
                None,
            ),
        };

        Screen {
            text,
            cursor,
            cursor_mode: self.cursor_mode,
        }
    }
}
