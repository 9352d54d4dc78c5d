//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each panel is rendered by a separate submodule for clarity.

mod colors;
mod dialogs;
mod empty;
mod header;
mod help;
mod materials;
mod sidebar;
mod status;
mod timer;
mod tree;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, InputMode, View};
use crate::constants::layout;

// Re-export submodule draw functions for internal use
use dialogs::{draw_alert, draw_custom_duration_dialog, draw_materials_dialog};
use header::draw_header;
use help::draw_help_overlay;
use materials::draw_materials;
use sidebar::{draw_presets, draw_sos_panel};
use status::{draw_commands_bar, draw_status_bar};
use timer::draw_timer;
use tree::draw_tree;

/// Main draw function - lays out the panels and dispatches overlays.
pub fn draw(frame: &mut Frame, app: &App) {
    // Create the main layout: header, content, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Min(0), // Main content
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    // Draw the header
    draw_header(frame, chunks[0], app);

    // Sidebar (presets, SOS) on the left, session on the right
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(layout::SIDEBAR_WIDTH),
            Constraint::Min(0),
        ])
        .split(chunks[1]);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(sidebar::sos_panel_height(app)),
        ])
        .split(columns[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),                   // Clock and progress
            Constraint::Length(layout::TREE_HEIGHT), // Tree
            Constraint::Min(0),                      // Study materials
        ])
        .split(columns[1]);

    draw_presets(frame, sidebar[0], app);
    draw_sos_panel(frame, sidebar[1], app);
    draw_timer(frame, main[0], app);
    draw_tree(frame, main[1], app);
    draw_materials(frame, main[2], app);

    // Draw the input dialog on top of the timer view
    match &app.current_view {
        View::Timer => {}
        View::Input(InputMode::CustomDuration) => draw_custom_duration_dialog(frame, app),
        View::Input(InputMode::Materials) => draw_materials_dialog(frame, app),
    }

    // Draw the commands bar (shows available actions)
    draw_commands_bar(frame, chunks[2], app);

    // Draw the status bar (shows messages)
    draw_status_bar(frame, chunks[3], app);

    // Draw help overlay if enabled
    if app.show_help {
        draw_help_overlay(frame);
    }

    // The focus alert sits above everything else
    if let Some(message) = &app.alerts.current {
        draw_alert(frame, message);
    }
}
