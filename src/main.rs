//! LeafMeAlone
//!
//! A terminal focus timer: pick a session length and watch a tree grow
//! while you study. Switching away from the terminal mid-session raises
//! an alert unless SOS mode is on.
//! Run with: leafmealone [-c|--config <PATH>] [-l|--log-file <PATH>] [-v]

mod app;
mod config;
mod constants;
mod duration;
mod error;
mod event;
mod focus;
mod materials;
mod session;
mod sos;
mod stage;
mod timer;
mod ui;

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::{Cli, Settings};
use crate::event::EventHandler;
use crate::focus::TerminalFocus;

/// Entry point for the application.
///
/// Settings are loaded before the terminal is taken over so that a bad
/// config file is reported on the normal screen.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli).context("Failed to set up logging")?;

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    info!(
        presets = settings.presets.len(),
        apps = settings.allowed_apps.len(),
        "starting leafmealone v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Initialize the terminal
    let terminal = ratatui::init();

    let app = App::new(settings, Box::new(TerminalFocus));

    // Run the application
    let result = run_app(terminal, app).await;

    // Restore the terminal to its original state
    ratatui::restore();

    result
}

/// Sends logs to `--log-file` when given, otherwise discards them.
///
/// The terminal belongs to the UI, so logs never go to stdout.
fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("leafmealone={}", cli.log_level())));

    match cli.log_file.as_deref() {
        Some(path) => {
            let file = open_log_file(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .try_init();
        }
    }
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Cannot open log file {}", path.display()))
}

/// Main application loop.
///
/// This function runs the TUI event loop:
/// 1. Draw the current UI state
/// 2. Wait for a key, a focus report or the next tick deadline
/// 3. Update application state
/// 4. Repeat until the user quits
async fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    let mut events = EventHandler::new();

    loop {
        // Draw the UI
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        let text_entry = app.is_text_entry();
        let deadline = app.session.next_deadline();

        tokio::select! {
            event = async {
                // Use different key mapping for input mode vs normal mode
                if text_entry {
                    events.next_input().await
                } else {
                    events.next().await
                }
            } => {
                let event = event.context("Failed to read terminal event")?;
                if let Some(action) = event {
                    // Process the event and check if we should quit
                    if app.handle_event(action) {
                        break;
                    }
                }
            }
            _ = sleep_until_deadline(deadline) => {
                app.on_tick(Instant::now());
            }
        }
    }

    info!("quitting");
    Ok(())
}

/// Sleeps until the next tick, or forever while no session runs.
async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
