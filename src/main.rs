//! Tactile-Paint: a terminal grid canvas editor
//!
//! Pick a canvas size, paint paths and obstacles with the keyboard, then
//! export the canvas as text, JSON or PNG.

mod app;
mod config;
mod domain;
mod export;
mod input;
mod platform;
mod ui;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

use app::controller::{AppController, AppError, Exit};
use config::EditorConfig;
use platform::terminal::TerminalSession;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to config.toml in the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Prefill both canvas size fields
    #[arg(long, value_name = "N")]
    size: Option<u32>,

    /// Directory for log files
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Directory used when the export path is left empty
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "GitHub", "tactile_paint")
}

/// Starts file logging; the UI owns the terminal so nothing goes to stderr
fn start_logging(log_dir: &Path) -> Result<LoggerHandle, AppError> {
    std::fs::create_dir_all(log_dir).map_err(|source| AppError::LogDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename("tactile_paint")
                .suffix("log")
                .suppress_timestamp(),
        )
        .rotate(
            Criterion::Size(64 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()?;
    Ok(handle)
}

/// Starts file logging, or warns and carries on without a log file
fn open_log(log_dir: &Path) -> Option<LoggerHandle> {
    match start_logging(log_dir) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: running without a log file: {e}");
            None
        }
    }
}

fn run(args: Args) -> Result<ExitCode, AppError> {
    let dirs = project_dirs();
    let log_dir = args
        .log_dir
        .clone()
        .or_else(|| dirs.as_ref().map(|dirs| dirs.config_dir().to_path_buf()));
    let _logger = log_dir.and_then(|dir| open_log(&dir));
    log::info!("Starting tactile-paint {}", env!("CARGO_PKG_VERSION"));

    let fallback = dirs
        .as_ref()
        .map(|dirs| dirs.config_dir().join(EditorConfig::FILE_NAME));
    let mut config = EditorConfig::load_or_default(args.config.as_deref(), fallback.as_deref())?;
    if let Some(export_dir) = args.export_dir {
        config.export_dir = export_dir;
    }
    log::debug!("Configuration: {config:?}");

    let mut controller = AppController::new(config, args.size);
    // The session is dropped before anything is printed
    let exit = {
        let mut session = TerminalSession::new()?;
        controller.run(&mut session)
    }?;

    log::info!("Session ended: {exit:?}");
    match exit {
        Exit::Quit => {}
        Exit::Rejected(rejection) => eprintln!("Invalid canvas size: {rejection}"),
        Exit::Exported(path) => println!("Canvas exported to {}", path.display()),
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Alas, there's been an error: {e}");
            ExitCode::FAILURE
        }
    }
}
